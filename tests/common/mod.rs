//! Common test utilities for integration tests

use std::fs;
use std::io::Write;
use std::path::Path;

/// Helper function to create a test OSM file
#[allow(dead_code)]
pub fn create_test_osm_file(path: &Path, content: &str) {
    let parent = path.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    fs::File::create(path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
}

/// Single way carrying an NHD tag and nothing else
#[allow(dead_code)]
pub const SINGLE_WAY_OSM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="test">
  <way id="100" uid="42" version="1" changeset="900" timestamp="2010-05-01T12:00:00Z" user="nhd-import">
    <tag k="NHD:way_id" v="5"/>
  </way>
</osm>"#;

/// Small extract mixing nodes, ways, a relation and address tags
#[allow(dead_code)]
pub const SAMPLE_OSM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="test">
  <bounds minlat="41.6" minlon="-88.4" maxlat="41.8" maxlon="-88.1"/>
  <node id="1" visible="true" lat="41.5" lon="-87.9" uid="7" version="3" changeset="11" timestamp="2012-03-28T18:31:23Z" user="alice"/>
  <node id="2" lat="41.7584" lon="-88.3201" uid="8" version="1" changeset="12" timestamp="2013-01-02T10:00:00Z" user="bob">
    <tag k="addr:street" v="Elm St"/>
    <tag k="addr:street:predir" v="N"/>
    <tag k="addr:housenumber" v="12"/>
    <tag k="amenity" v="library"/>
  </node>
  <way id="100" uid="42" version="1" changeset="900" timestamp="2010-05-01T12:00:00Z" user="nhd-import">
    <nd ref="1"/>
    <nd ref="2"/>
    <tag k="NHD:way_id" v="5"/>
    <tag k="waterway" v="stream"/>
  </way>
  <way id="101" uid="9" version="2" changeset="13" timestamp="2014-07-07T07:07:07Z" user="carol">
    <nd ref="2"/>
    <tag k="highway" v="residential"/>
    <tag k="name" v="Galena Blvd"/>
  </way>
  <relation id="500" uid="9" version="1" changeset="14" timestamp="2014-07-07T07:07:07Z" user="carol">
    <member type="way" ref="100" role="outer"/>
    <tag k="type" v="multipolygon"/>
  </relation>
</osm>"#;

/// Node missing its changeset attribute
#[allow(dead_code)]
pub const MISSING_CHANGESET_OSM: &str = r#"<?xml version="1.0"?>
<osm>
  <node id="1" lat="41.5" lon="-87.9" uid="7" version="3" timestamp="2012-03-28T18:31:23Z" user="alice"/>
</osm>"#;
