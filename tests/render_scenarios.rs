// tests/render_scenarios.rs

use approx::assert_relative_eq;
use std::fs;
use std::path::PathBuf;
use voronoi_mapper::math::prelude::{CellFill, RenderSpec};
use voronoi_mapper::{MapperConfig, MapperError, RenderRequest, Stage, VoronoiMapper};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "voronoi_mapper_scenario_{}_{}",
        name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_table(dir: &PathBuf, rows: &[&str]) -> PathBuf {
    let path = dir.join("places.csv");
    let mut content = String::from("Label,X,Y,Visited\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

fn mapper() -> VoronoiMapper {
    VoronoiMapper::new(MapperConfig::new().with_seed(42).with_canvas_size(400, 300)).unwrap()
}

fn fill_colors(document: &str) -> Vec<String> {
    document
        .split("fill=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_unvisited_points_render_without_fills() {
    let dir = scratch_dir("unvisited");
    let input = write_table(
        &dir,
        &["A,0,0,N", "B,1,0,N", "C,0,1,N", "D,1,1,N", "E,0.5,0.5,N"],
    );
    let stem = dir.join("map");
    let request = RenderRequest::new(&input, stem.to_string_lossy()).with_format("svg");

    let outcome = mapper().render(&request).unwrap();
    assert_eq!(outcome.path, dir.join("map.svg"));

    let document = fs::read_to_string(&outcome.path).unwrap();
    assert_eq!(document.matches("class=\"cell-fill\"").count(), 0);
    assert_eq!(document.matches("class=\"label\"").count(), 5);
    assert_eq!(document.matches("class=\"marker\"").count(), 5);
    assert_eq!(outcome.stats.labels, 5);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_visited_points_get_hex_fills() {
    let dir = scratch_dir("visited");
    let input = write_table(&dir, &["A,0,0,Y", "B,2,0,Y", "C,1,2,Y"]);
    let stem = dir.join("map");
    let request = RenderRequest::new(&input, stem.to_string_lossy()).with_format("svg");

    let outcome = mapper().render(&request).unwrap();
    let document = fs::read_to_string(&outcome.path).unwrap();
    assert_eq!(document.matches("class=\"cell-fill\"").count(), 3);

    let colors = fill_colors(&document);
    assert_eq!(colors.len(), 3);
    for color in colors {
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_missing_focal_label_writes_nothing() {
    let dir = scratch_dir("missing_focus");
    let input = write_table(&dir, &["A,0,0,Y", "B,2,0,N", "C,1,2,Y"]);
    let stem = dir.join("map");
    let request = RenderRequest::new(&input, stem.to_string_lossy())
        .with_format("svg")
        .with_fisheye("Nowhere");

    let err = mapper().render(&request).unwrap_err();
    assert_eq!(err.stage, Stage::Transform);
    assert!(matches!(
        err.source,
        MapperError::FocalPointNotFound { ref label, available: 3 } if label == "Nowhere"
    ));
    assert!(!dir.join("map.svg").exists());

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_two_points_still_render() {
    let dir = scratch_dir("two_points");
    let input = write_table(&dir, &["A,0,0,Y", "B,1,0,Y"]);
    let stem = dir.join("map");
    let request = RenderRequest::new(&input, stem.to_string_lossy()).with_format("svg");

    let outcome = mapper().render(&request).unwrap();
    let document = fs::read_to_string(&outcome.path).unwrap();
    assert_eq!(document.matches("class=\"marker\"").count(), 2);
    let fills = document.matches("class=\"cell-fill\"").count();
    assert!(fills == 0 || fills == 2);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_unsupported_format_fails_before_writing() {
    let dir = scratch_dir("bad_format");
    let input = write_table(&dir, &["A,0,0,Y", "B,2,0,N", "C,1,2,Y"]);
    let stem = dir.join("map");
    let request = RenderRequest::new(&input, stem.to_string_lossy()).with_format("xyz");

    let err = mapper().render(&request).unwrap_err();
    assert_eq!(err.stage, Stage::Render);
    assert!(matches!(err.source, MapperError::UnsupportedFormat { .. }));
    let names: Vec<String> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["places.csv".to_string()]);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_fisheye_moves_points_around_focus() {
    let dir = scratch_dir("fisheye");
    let input = write_table(&dir, &["A,1,1,Y", "B,3,1,N", "C,1,5,Y"]);
    let stem = dir.join("map");
    let request = RenderRequest::new(&input, stem.to_string_lossy())
        .with_format("svg")
        .with_fisheye("A");

    let outcome = mapper().render(&request).unwrap();
    let positions: Vec<_> = outcome.specs.iter().map(|s| s.position).collect();
    assert_relative_eq!(positions[0].x, 1.0);
    assert_relative_eq!(positions[0].y, 1.0);
    assert_relative_eq!(positions[1].x, 0.75);
    assert_relative_eq!(positions[1].y, 0.25);
    assert_relative_eq!(positions[2].x, 0.0625);
    assert_relative_eq!(positions[2].y, 0.3125);
    assert!(outcome.path.exists());

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_same_seed_same_colors() {
    let dir = scratch_dir("seeded");
    let input = write_table(&dir, &["A,0,0,Y", "B,2,0,Y", "C,1,2,Y", "D,1,0.7,N"]);

    let first = mapper()
        .render(&RenderRequest::new(&input, dir.join("a").to_string_lossy()).with_format("svg"))
        .unwrap();
    let second = mapper()
        .render(&RenderRequest::new(&input, dir.join("b").to_string_lossy()).with_format("svg"))
        .unwrap();

    let fills = |specs: &[RenderSpec]| {
        specs.iter().map(|s| s.fill.clone()).collect::<Vec<CellFill>>()
    };
    assert_eq!(fills(&first.specs), fills(&second.specs));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_png_output_is_written() {
    let dir = scratch_dir("png");
    let input = write_table(&dir, &["A,0,0,Y", "B,2,0,N", "C,1,2,Y"]);
    let request = RenderRequest::new(&input, dir.join("map").to_string_lossy());

    let outcome = mapper().render(&request).unwrap();
    assert_eq!(outcome.path, dir.join("map.png"));
    let bytes = fs::read(&outcome.path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    assert_eq!(outcome.stats.labels, outcome.stats.markers);
    assert_eq!(outcome.stats.labels, 3);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn test_pdf_output_is_written() {
    let dir = scratch_dir("pdf");
    let input = write_table(&dir, &["A,0,0,Y", "B,2,0,N", "C,1,2,Y"]);
    let request = RenderRequest::new(&input, dir.join("map").to_string_lossy()).with_format("pdf");

    let outcome = mapper().render(&request).unwrap();
    assert_eq!(outcome.path, dir.join("map.pdf"));
    let bytes = fs::read(&outcome.path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(outcome.stats.labels, 3);

    fs::remove_dir_all(dir).unwrap();
}
