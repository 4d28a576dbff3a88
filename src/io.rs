use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use serde::Deserialize;

use crate::error::{FlowError, Result};
use crate::report::FlowReport;
use crate::types::{Edge, EdgeDB, VertexId};

// Binary layout, all fields native-endian i16:
//
// vertex_count (from to capacity)*
//
// A trailing record with fewer than three complete fields is ignored.

pub fn read_edges_binary(path: impl AsRef<Path>) -> Result<EdgeDB> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| FlowError::io(path, e))?;
    decode_edges_binary(&bytes)
}

pub fn decode_edges_binary(bytes: &[u8]) -> Result<EdgeDB> {
    let mut cursor = Cursor::new(bytes);
    let vertex_count = cursor
        .read_i16::<NativeEndian>()
        .map_err(|_| FlowError::MissingVertexCount)?;
    let vertex_count = checked_vertex_count(vertex_count.into())?;
    let mut edges = Vec::new();
    while let Some([from, to, capacity]) = read_record(&mut cursor) {
        edges.push(Edge {
            from: checked_vertex(from.into(), vertex_count)?,
            to: checked_vertex(to.into(), vertex_count)?,
            capacity: capacity.into(),
        });
    }
    Ok(EdgeDB::new(vertex_count, edges))
}

fn read_record(cursor: &mut Cursor<&[u8]>) -> Option<[i16; 3]> {
    let from = cursor.read_i16::<NativeEndian>().ok()?;
    let to = cursor.read_i16::<NativeEndian>().ok()?;
    let capacity = cursor.read_i16::<NativeEndian>().ok()?;
    Some([from, to, capacity])
}

pub fn write_edges_binary(edges: &EdgeDB, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_edges_binary(edges)?;
    fs::write(path, bytes).map_err(|e| FlowError::io(path, e))
}

pub fn encode_edges_binary(edges: &EdgeDB) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(2 + 6 * edges.edge_count());
    write_i16(&mut bytes, edges.vertex_count() as i64)?;
    for Edge { from, to, capacity } in edges.edges() {
        write_i16(&mut bytes, *from as i64)?;
        write_i16(&mut bytes, *to as i64)?;
        write_i16(&mut bytes, *capacity)?;
    }
    Ok(bytes)
}

fn write_i16(bytes: &mut Vec<u8>, value: i64) -> Result<()> {
    let narrow = i16::try_from(value).map_err(|_| FlowError::ValueTooLarge { value })?;
    bytes
        .write_i16::<NativeEndian>(narrow)
        .map_err(|e| FlowError::io("<memory>", e))
}

// CSV layout: the first line holds the vertex count, every further line one
// `from,to,capacity` record. Blank lines and lines starting with `#` are
// skipped.

pub fn read_edges_csv(path: impl AsRef<Path>) -> Result<EdgeDB> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| FlowError::io(path, e))?;
    parse_edges_csv(&contents)
}

pub fn parse_edges_csv(contents: &str) -> Result<EdgeDB> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let vertex_count = match lines.next() {
        Some((line_number, line)) => {
            checked_vertex_count(parse_number(line, line_number)?)?
        }
        None => return Err(FlowError::MissingVertexCount),
    };

    let mut edges = Vec::new();
    for (line_number, line) in lines {
        match &line.split(',').map(str::trim).collect::<Vec<_>>()[..] {
            [from, to, capacity] => edges.push(Edge {
                from: checked_vertex(parse_number(from, line_number)?, vertex_count)?,
                to: checked_vertex(parse_number(to, line_number)?, vertex_count)?,
                capacity: parse_number(capacity, line_number)?,
            }),
            _ => {
                return Err(FlowError::Parse {
                    line: line_number,
                    message: format!("expected from,to,capacity but got \"{line}\""),
                })
            }
        }
    }
    Ok(EdgeDB::new(vertex_count, edges))
}

pub fn write_edges_csv(edges: &EdgeDB, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_edges_csv(edges)).map_err(|e| FlowError::io(path, e))
}

pub fn format_edges_csv(edges: &EdgeDB) -> String {
    let mut out = format!("{}\n", edges.vertex_count());
    for Edge { from, to, capacity } in edges.edges() {
        out.push_str(&format!("{from},{to},{capacity}\n"));
    }
    out
}

pub fn read_edges_json(path: impl AsRef<Path>) -> Result<EdgeDB> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| FlowError::io(path, e))?;
    parse_edges_json(&contents)
}

pub fn parse_edges_json(contents: &str) -> Result<EdgeDB> {
    let list: JsonEdgeList = serde_json::from_str(contents)?;
    let vertex_count = checked_vertex_count(list.vertex_count)?;
    let edges = list
        .edges
        .into_iter()
        .map(|e| {
            Ok(Edge {
                from: checked_vertex(e.from, vertex_count)?,
                to: checked_vertex(e.to, vertex_count)?,
                capacity: e.capacity,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(EdgeDB::new(vertex_count, edges))
}

/// Creates or truncates `path` and writes the text report.
pub fn write_report(report: &FlowReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FlowError::io(path, e))?;
    let mut out = BufWriter::new(file);
    report
        .write_text(&mut out)
        .and_then(|_| out.flush())
        .map_err(|e| FlowError::io(path, e))
}

fn checked_vertex_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| FlowError::InvalidVertexCount(count))
}

fn checked_vertex(vertex: i64, vertex_count: usize) -> Result<VertexId> {
    match usize::try_from(vertex) {
        Ok(v) if v < vertex_count => Ok(v),
        _ => Err(FlowError::VertexOutOfRange {
            vertex,
            vertex_count,
        }),
    }
}

fn parse_number(field: &str, line: usize) -> Result<i64> {
    field.parse().map_err(|_| FlowError::Parse {
        line,
        message: format!("expected an integer but got \"{field}\""),
    })
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "camelCase")]
struct JsonEdgeList {
    vertex_count: i64,
    edges: Vec<JsonEdge>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct JsonEdge {
    from: i64,
    to: i64,
    capacity: i64,
}
