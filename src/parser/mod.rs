mod ndjson_writer;
mod osm_reader;
mod shaper;
mod street_names;

// Re-export public API
pub use ndjson_writer::{output_path_for, process_map, shape_stream, write_document, ShapeStats};
pub use osm_reader::OsmReader;
pub use shaper::shape_element;
pub use street_names::update_name;
