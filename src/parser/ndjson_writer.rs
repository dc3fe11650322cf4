use super::osm_reader::OsmReader;
use super::shaper::shape_element;
use crate::constants::OUTPUT_EXTENSION;
use crate::errors::{AppError, AppResult};
use crate::models::{ShapedDocument, StreetMapping};
use crate::ui;
use crate::utils::{format_duration, mb_from_bytes, round_two_decimals};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Counters for one pass over an OSM document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShapeStats {
    /// Primitives read from the input
    pub elements: usize,
    /// Documents written to the output
    pub documents: usize,
}

impl ShapeStats {
    pub fn skipped(&self) -> usize {
        self.elements - self.documents
    }
}

/// Path of the NDJSON file written for `input`: the input path with `.json` appended.
///
/// `data/aurora_il.osm` becomes `data/aurora_il.osm.json`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Shapes an OSM XML extract into newline-delimited JSON.
///
/// The input is streamed element by element. Every `node` and `way` is shaped,
/// written to `<input>.json` (created or truncated), and collected into the
/// returned vector in source order. With `pretty` each document is indented
/// over several lines; otherwise each occupies exactly one line.
///
/// # Errors
///
/// The first malformed element, XML error or I/O error aborts the run. The
/// output file is left as far as it got.
///
/// # Example
///
/// ```no_run
/// use osm_wrangle::models::StreetMapping;
/// use osm_wrangle::parser;
/// use std::path::Path;
///
/// # fn main() -> Result<(), osm_wrangle::errors::AppError> {
/// let docs = parser::process_map(Path::new("aurora_il.osm"), false, &StreetMapping::default())?;
/// // Writes aurora_il.osm.json
/// println!("{} documents", docs.len());
/// # Ok(())
/// # }
/// ```
pub fn process_map(
    input: &Path,
    pretty: bool,
    mapping: &StreetMapping,
) -> AppResult<Vec<ShapedDocument>> {
    let started = Instant::now();
    let output = output_path_for(input);

    let source = File::open(input).map_err(file_error("open", input))?;
    let sink = File::create(&output).map_err(file_error("create", &output))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        pretty,
        street_suffixes = mapping.len(),
        "Starting OSM ingestion"
    );
    if mapping.is_empty() {
        warn!("Street mapping is empty, street names are copied verbatim");
    }

    let mut data = Vec::new();
    let stats = shape_stream(
        BufReader::new(source),
        BufWriter::new(sink),
        pretty,
        mapping,
        |doc| data.push(doc),
    )?;

    let size_mb = fs::metadata(&output)
        .map(|m| round_two_decimals(mb_from_bytes(m.len())))
        .unwrap_or(0.0);
    info!(
        documents = stats.documents,
        skipped = stats.skipped(),
        output_mb = size_mb,
        elapsed = %format_duration(started.elapsed()),
        "Ingestion completed"
    );

    Ok(data)
}

/// Streams `source` through the shaper into `sink`, one JSON record per document.
///
/// `on_document` receives every shaped document after it has been written.
/// The sink is flushed before returning.
pub fn shape_stream<R, W, F>(
    source: R,
    mut sink: W,
    pretty: bool,
    mapping: &StreetMapping,
    mut on_document: F,
) -> AppResult<ShapeStats>
where
    R: BufRead,
    W: Write,
    F: FnMut(ShapedDocument),
{
    let spinner = ui::create_spinner("Shaping OSM elements")?;
    let mut stats = ShapeStats::default();

    for element in OsmReader::new(source) {
        let element = element?;
        stats.elements += 1;

        let Some(doc) = shape_element(&element, mapping)? else {
            debug!(element = %element.name, "Skipping element");
            continue;
        };

        write_document(&mut sink, &doc, pretty)?;
        stats.documents += 1;
        on_document(doc);

        if stats.documents % 1000 == 0 {
            spinner.set_message(format!("{} documents", stats.documents));
        }
        spinner.tick();
    }

    sink.flush()
        .map_err(|e| AppError::IoError(format!("Failed to flush output: {e}")))?;
    spinner.finish_and_clear();

    Ok(stats)
}

/// Writes one document followed by a newline.
pub fn write_document<W: Write>(sink: &mut W, doc: &ShapedDocument, pretty: bool) -> AppResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *sink, doc)?;
    } else {
        serde_json::to_writer(&mut *sink, doc)?;
    }
    sink.write_all(b"\n")?;
    Ok(())
}

fn file_error<'a>(action: &'a str, path: &'a Path) -> impl FnOnce(io::Error) -> AppError + 'a {
    move |e| AppError::IoError(format!("Failed to {action} {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAY_XML: &str = r#"<osm>
  <way id="100" uid="1" version="2" changeset="3" timestamp="2012-01-01T00:00:00Z" user="u">
    <tag k="NHD:way_id" v="5"/>
  </way>
  <relation id="7"/>
</osm>"#;

    fn shape_to_string(xml: &str, pretty: bool) -> (String, ShapeStats, Vec<ShapedDocument>) {
        let mut out = Vec::new();
        let mut docs = Vec::new();
        let stats = shape_stream(
            xml.as_bytes(),
            &mut out,
            pretty,
            &StreetMapping::default(),
            |d| docs.push(d),
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), stats, docs)
    }

    #[test]
    fn output_path_appends_json_extension() {
        assert_eq!(
            output_path_for(Path::new("data/aurora_il.osm")),
            PathBuf::from("data/aurora_il.osm.json")
        );
        let bare = output_path_for(Path::new("extract"));
        assert_eq!(bare, PathBuf::from("extract.json"));
    }

    #[test]
    fn compact_output_is_one_line_per_document() {
        let (text, stats, docs) = shape_to_string(WAY_XML, false);
        assert_eq!(
            text,
            concat!(
                r#"{"type":"way","id":"100","created":{"uid":"1","version":"2","changeset":"3","#,
                r#""timestamp":"2012-01-01T00:00:00Z","user":"u"},"NHD:way_id":"5"}"#,
                "\n"
            )
        );
        assert_eq!(stats.elements, 2);
        assert_eq!(stats.documents, 1);
        assert_eq!(stats.skipped(), 1);
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn pretty_output_is_indented() {
        let (text, _, _) = shape_to_string(WAY_XML, true);
        assert!(text.starts_with("{\n  \"type\": \"way\","));
        assert!(text.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed["NHD:way_id"], "5");
    }

    #[test]
    fn malformed_element_aborts_stream() {
        let xml = r#"<osm><node id="1" lat="1" lon="2"/></osm>"#;
        let mut out = Vec::new();
        let mapping = StreetMapping::default();
        let result = shape_stream(xml.as_bytes(), &mut out, false, &mapping, |_| {});
        assert!(matches!(result, Err(AppError::MissingAttribute { .. })));
        assert!(out.is_empty());
    }
}
