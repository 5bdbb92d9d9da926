//! Integration tests for building and rendering markup documents.

use proptest::prelude::*;

use gyre_core::{ElementKind, MarkupError, MarkupNode, Renderer, path};

const CIRCLE_KEYS: [&str; 7] = ["id", "cx", "cy", "r", "stroke", "stroke-width", "fill"];

fn red_line_document() -> Result<MarkupNode, MarkupError> {
    MarkupNode::html().with_child(
        MarkupNode::body().with_child(
            MarkupNode::svg().with_size(1000.0, 1000.0)?.with_child(
                MarkupNode::path()
                    .with_id("lineAB")?
                    .with_attribute("stroke", "red")?
                    .with_attribute("stroke-width", "3")?
                    .with_path_data(&[path::move_to(100.0, 350.0), path::line_by(150.0, -300.0)])?,
            )?,
        )?,
    )
}

#[test]
fn test_html_document_with_single_path() {
    let document = red_line_document().expect("Document should build");

    let expected = concat!(
        "<!DOCTYPE html>\n",
        "\n",
        "<html>\n",
        "  <body>\n",
        "    <svg width=\"1000\" height=\"1000\">\n",
        "      <path id=\"lineAB\" stroke=\"red\" stroke-width=\"3\" d=\"M 100 350 l 150 -300\"/>\n",
        "    </svg>\n",
        "  </body>\n",
        "</html>\n",
    );

    let renderer = Renderer::default();
    assert_eq!(renderer.render(&document), expected);
    assert_eq!(renderer.render(&document), renderer.render(&document));
}

#[test]
fn test_labelled_scene() {
    let labels = MarkupNode::group()
        .with_attribute("font-size", "30")
        .and_then(|g| g.with_attribute("text-anchor", "middle"))
        .and_then(|g| {
            g.with_children([
                MarkupNode::text("A").with_corner(100.0, 350.0)?,
                MarkupNode::text("B").with_corner(250.0, 50.0)?,
            ])
        })
        .expect("Group should build");

    let rendered = Renderer::default().render(&labels);
    assert_eq!(
        rendered,
        concat!(
            "<g font-size=\"30\" text-anchor=\"middle\">\n",
            "  <text x=\"100\" y=\"350\">\n",
            "    A\n",
            "  </text>\n",
            "  <text x=\"250\" y=\"50\">\n",
            "    B\n",
            "  </text>\n",
            "</g>\n",
        )
    );
}

#[test]
fn test_motion_along_linked_path() {
    let pupil = MarkupNode::circle()
        .with_id("pupil")
        .and_then(|c| c.with_center(200.0, 200.0))
        .and_then(|c| c.with_radius(17.0))
        .and_then(|c| {
            c.with_child(
                MarkupNode::animate_motion()
                    .with_attribute("dur", "6s")?
                    .with_attribute("repeatCount", "indefinite")?
                    .with_child(MarkupNode::mpath().with_link("wanderingEye")?)?,
            )
        })
        .expect("Pupil should build");

    assert_eq!(
        pupil.to_string(),
        concat!(
            "<circle id=\"pupil\" cx=\"200\" cy=\"200\" r=\"17\">\n",
            "  <animateMotion dur=\"6s\" repeatCount=\"indefinite\">\n",
            "    <mpath xlink:href=\"#wanderingEye\"/>\n",
            "  </animateMotion>\n",
            "</circle>\n",
        )
    );
}

fn attribute_value() -> impl Strategy<Value = String> {
    "[a-z0-9 .#-]{0,30}"
}

fn circle_attributes() -> impl Strategy<Value = Vec<(&'static str, String)>> {
    (
        Just(CIRCLE_KEYS.to_vec()).prop_shuffle(),
        prop::collection::vec(attribute_value(), CIRCLE_KEYS.len()),
    )
        .prop_map(|(keys, values)| keys.into_iter().zip(values).collect())
}

fn build_circle(attributes: &[(&str, String)]) -> MarkupNode {
    let mut circle = MarkupNode::circle();
    for (key, value) in attributes {
        circle
            .set_attribute(key, value.clone())
            .expect("Whitelisted attribute should be accepted");
    }
    circle
}

proptest! {
    #[test]
    fn non_whitelisted_attribute_is_rejected(key in "[a-zA-Z:-]{1,14}") {
        for kind in [ElementKind::Circle, ElementKind::Line, ElementKind::Svg, ElementKind::Group] {
            prop_assume!(!kind.allows(&key));
            let result = MarkupNode::new(kind).with_attribute(&key, "value");
            let is_invalid_attribute = matches!(
                result,
                Err(MarkupError::InvalidAttribute { ref attribute, kind: k })
                    if *attribute == key && k == kind
            );
            prop_assert!(is_invalid_attribute);
        }
    }

    #[test]
    fn whitelisted_values_are_preserved_in_insertion_order(attributes in circle_attributes()) {
        let circle = build_circle(&attributes);
        let stored: Vec<(String, String)> = circle
            .attributes()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let expected: Vec<(String, String)> = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        prop_assert_eq!(stored, expected);
    }

    #[test]
    fn rendering_is_deterministic(attributes in circle_attributes(), width in 10usize..120) {
        let renderer = Renderer::new(width);
        let first = renderer.render(&build_circle(&attributes));
        let second = renderer.render(&build_circle(&attributes));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn wrapped_lines_respect_width(attributes in circle_attributes(), width in 10usize..120) {
        let circle = build_circle(&attributes);
        let rendered = Renderer::new(width).render(&circle);
        let mut lines: Vec<&str> = rendered.lines().collect();
        // Closing tag.
        prop_assert_eq!(lines.pop(), Some("</circle>"));

        for (idx, line) in lines.iter().enumerate() {
            let body = line.strip_suffix('>').unwrap_or(line);
            let attribute_count = body.matches("=\"").count();
            prop_assert!(attribute_count >= 1);
            prop_assert!(
                body.chars().count() <= width || attribute_count == 1,
                "line {idx} too wide: {line:?}"
            );
            if idx > 0 {
                prop_assert!(line.starts_with("        "));
                prop_assert!(!line[8..].starts_with(' '));
            }
        }
    }
}
