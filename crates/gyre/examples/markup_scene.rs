//! Example: Building a markup scene by hand
//!
//! This example builds an animated SVG directly from markup nodes and path
//! commands, without going through the ring-graph generator, and then
//! renders a small ring graph for comparison.

use gyre::{
    DiagramBuilder,
    markup::MarkupNode,
    path::{self, PathCommand},
    render::Renderer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building scene from markup nodes...\n");

    // A closed curve for the pupil to wander along
    let wander: Vec<PathCommand> = vec![
        path::move_to(150.0, 200.0),
        path::cubic_to(150.0, 120.0, 250.0, 120.0, 250.0, 200.0),
        path::smooth_cubic_to(150.0, 280.0, 150.0, 200.0),
        path::close(),
    ];

    let eye = MarkupNode::circle()
        .with_center(200.0, 200.0)?
        .with_radius(100.0)?
        .with_attribute("stroke", "black")?
        .with_attribute("stroke-width", "4")?
        .with_attribute("fill", "white")?;

    let track = MarkupNode::path()
        .with_id("wanderingEye")?
        .with_attribute("fill", "none")?
        .with_path_data(&wander)?;

    let pupil = MarkupNode::circle()
        .with_id("pupil")?
        .with_center(0.0, 0.0)?
        .with_radius(17.0)?
        .with_child(
            MarkupNode::animate_motion()
                .with_attribute("dur", "6s")?
                .with_attribute("repeatCount", "indefinite")?
                .with_child(MarkupNode::mpath().with_link("wanderingEye")?)?,
        )?;

    let labels = MarkupNode::group()
        .with_attribute("font-size", "30")?
        .with_attribute("text-anchor", "middle")?
        .with_children([
            MarkupNode::text("Left").with_corner(150.0, 350.0)?,
            MarkupNode::text("Right").with_corner(250.0, 350.0)?,
        ])?;

    let document = MarkupNode::html().with_child(MarkupNode::body().with_child(
        MarkupNode::svg()
            .with_size(400.0, 400.0)?
            .with_children([eye, track, pupil, labels])?,
    )?)?;

    println!("{}", Renderer::default().render(&document));

    println!("Rendering a triangle ring graph...\n");
    let rendered = DiagramBuilder::default().render("triangle", 3, 1)?;
    println!("{rendered}");

    Ok(())
}
