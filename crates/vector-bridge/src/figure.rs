//! Conversion of a [`Scene`] into formats a browser renderer consumes.

use serde_json::{json, Value};

use vector_types::{AspectMode, Scene, SceneLayout, Segment};

use crate::session_state::BridgeError;

fn segment_trace(segment: &Segment) -> Value {
    json!({
        "type": "scatter3d",
        "mode": "lines+markers",
        "x": [segment.start[0], segment.end[0]],
        "y": [segment.start[1], segment.end[1]],
        "z": [segment.start[2], segment.end[2]],
        "line": { "width": segment.line_width, "color": segment.line_color.as_str() },
        "marker": { "size": segment.marker_size, "color": segment.marker_color.as_str() },
        "name": segment.label,
    })
}

fn layout_value(layout: &SceneLayout) -> Value {
    let aspectmode = match layout.aspect {
        AspectMode::Cube => "cube",
    };
    json!({
        "scene": {
            "xaxis": { "range": layout.x_range },
            "yaxis": { "range": layout.y_range },
            "zaxis": { "range": layout.z_range },
            "aspectmode": aspectmode,
        },
        "margin": {
            "l": layout.margin.l,
            "r": layout.margin.r,
            "b": layout.margin.b,
            "t": layout.margin.t,
        },
        "width": layout.width,
        "height": layout.height,
    })
}

/// Build a Plotly-compatible figure: one `scatter3d` trace per segment, in
/// scene order, plus the fixed layout.
pub fn scene_to_figure(scene: &Scene) -> Value {
    let data: Vec<Value> = scene.segments.iter().map(segment_trace).collect();
    json!({
        "data": data,
        "layout": layout_value(&scene.layout),
    })
}

/// [`scene_to_figure`] serialized to a JSON string.
pub fn figure_json(scene: &Scene) -> Result<String, BridgeError> {
    serde_json::to_string(&scene_to_figure(scene)).map_err(|e| BridgeError::Serialization {
        reason: e.to_string(),
    })
}

/// Flat endpoint positions `[x0, y0, z0, x1, y1, z1, ...]`, two points per
/// segment, in scene order.
pub fn segment_positions(scene: &Scene) -> Vec<f32> {
    scene
        .segments
        .iter()
        .flat_map(|s| s.start.into_iter().chain(s.end))
        .map(|v| v as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vector_scene::{build_scene, SceneConfig};
    use vector_types::{Components, VectorEntry};

    fn sample_scene() -> Scene {
        let entries = [
            VectorEntry::new("a", Components::new(1.0, 0.0, 0.0)),
            VectorEntry::new("b", Components::new(0.0, 1.0, 0.0)),
        ];
        build_scene(&entries, true, &SceneConfig::default())
    }

    #[test]
    fn figure_has_one_trace_per_segment() {
        let fig = scene_to_figure(&sample_scene());
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);
        assert_eq!(data[0]["name"], "î");
        assert_eq!(data[0]["line"]["color"], "red");
        assert_eq!(data[2]["marker"]["color"], "blue");
        assert_eq!(data[4]["name"], "b");
        assert_eq!(data[4]["mode"], "lines+markers");
        assert_eq!(data[4]["x"], json!([1.0, 1.0]));
        assert_eq!(data[4]["y"], json!([0.0, 1.0]));
        assert_eq!(data[4]["line"]["color"], "gray");
        assert_eq!(data[4]["marker"]["color"], "orange");
    }

    #[test]
    fn figure_layout_is_fixed_cube() {
        let fig = scene_to_figure(&sample_scene());
        let layout = &fig["layout"];
        assert_eq!(layout["scene"]["xaxis"]["range"], json!([-10.0, 10.0]));
        assert_eq!(layout["scene"]["zaxis"]["range"], json!([-10.0, 10.0]));
        assert_eq!(layout["scene"]["aspectmode"], "cube");
        assert_eq!(layout["margin"]["l"], 0);
        assert_eq!(layout["width"], 700);
        assert_eq!(layout["height"], 700);
    }

    #[test]
    fn figure_json_parses_back() {
        let text = figure_json(&sample_scene()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, scene_to_figure(&sample_scene()));
    }

    #[test]
    fn positions_are_flattened_endpoints() {
        let positions = segment_positions(&sample_scene());
        assert_eq!(positions.len(), 5 * 6);
        // Second vector segment runs from (1,0,0) to (1,1,0).
        assert_eq!(&positions[24..30], &[1.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
    }
}
