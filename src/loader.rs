use std::fs;
use std::path::Path;

use nom::IResult;
use nom::bytes::complete::is_not;
use nom::character::complete::char;
use nom::combinator::all_consuming;
use nom::sequence::separated_pair;

use crate::error::LoaderError;
use crate::graph::Graph;

/// extension of graph definition files
pub const SUPPORTED_EXTENSION:&str = "txt";

const VERTICES_MARKER:&str = "%Vertices%";
const CONNECTIONS_MARKER:&str = "%Connections%";
const COMMENT_PREFIX:&str = "##";

/// part of the file being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Connections,
}

/** reads a graph definition file.

```text
## comment
%Vertices%
a b c
d
%Connections%
a-b b-c
c-d
```
*/
pub fn load_graph<P:AsRef<Path>>(path:P) -> Result<Graph<String>, LoaderError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoaderError::NotAFile(path.to_path_buf()));
    }
    if path.extension().map_or(true, |e| e != SUPPORTED_EXTENSION) {
        return Err(LoaderError::UnsupportedExtension(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)
        .map_err(|source| LoaderError::Io { path: path.to_path_buf(), source })?;
    parse_graph(&content)
}

/// reads a connection token "origin-destination"
pub fn read_connection(token:&str) -> IResult<&str, (&str,&str)> {
    all_consuming(separated_pair(is_not("-"), char('-'), is_not("-")))(token)
}

/** parses the content of a graph definition. No partial graph is returned on error. */
pub fn parse_graph(content:&str) -> Result<Graph<String>, LoaderError> {
    let mut graph = Graph::new();
    graph.populate_adj_matrix();
    let mut section = Section::Preamble;
    for (i,raw_line) in content.lines().enumerate() {
        let line_number = i+1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        if line == VERTICES_MARKER {
            if section == Section::Connections {
                return Err(LoaderError::VerticesAfterConnections { line: line_number });
            }
            section = Section::Vertices;
            continue;
        }
        if line == CONNECTIONS_MARKER {
            if section == Section::Preamble {
                return Err(LoaderError::ContentBeforeVertices { line: line_number });
            }
            section = Section::Connections;
            continue;
        }
        match section {
            Section::Preamble => {
                return Err(LoaderError::ContentBeforeVertices { line: line_number });
            },
            Section::Vertices => {
                for name in line.split_whitespace() {
                    graph.add_vertex(name.to_string());
                }
            },
            Section::Connections => {
                for token in line.split_whitespace() {
                    add_connection(&mut graph, token, line_number)?;
                }
            }
        }
    }
    if section != Section::Connections {
        return Err(LoaderError::MissingConnections);
    }
    Ok(graph)
}

fn add_connection(graph:&mut Graph<String>, token:&str, line:usize) -> Result<(), LoaderError> {
    let (origin, destination) = match read_connection(token) {
        Ok((_, pair)) => pair,
        Err(_) => return Err(LoaderError::MalformedConnection { line, token: token.to_string() })
    };
    let id = |name:&str| graph.id(&name.to_string())
        .ok_or_else(|| LoaderError::UnknownVertex { line, name: name.to_string() });
    let a = id(origin)?;
    let b = id(destination)?;
    graph.add_edge(a, b)
        .map_err(|_| LoaderError::SelfLoop { line, name: origin.to_string() })?;
    Ok(())
}
