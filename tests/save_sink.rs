//! 通过自定义 sink 把图写成 JSON 文件

use graphweave::{Error, Graph, GraphSink, GraphSnapshot, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// 测试用 JSON 文件 sink
struct JsonFileSink;

impl<T: Serialize> GraphSink<T> for JsonFileSink {
    fn write(&self, snapshot: &GraphSnapshot<'_, T>, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), snapshot)
            .map_err(|e| Error::SinkError(e.to_string()))
    }
}

#[test]
fn test_save_to_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");

    let mut graph: Graph<String> = Graph::new();
    let a = graph.add_node("alpha".to_string());
    let b = graph.add_node("beta".to_string());
    let c = graph.add_node("gamma".to_string());
    graph.add_undirected_edge(a, b, 1.5).unwrap();
    graph.add_directed_edge(b, c, 2.0).unwrap();

    graph.save(&path, &JsonFileSink).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(value["nodes"][2]["payload"], "gamma");
    assert_eq!(value["edges"][0]["kind"], "undirected");
    assert_eq!(value["edges"][1]["kind"], "directed");
    assert_eq!(value["edges"][1]["weight"], 2.0);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("graph.json");

    let graph: Graph<u32> = Graph::from_payloads(vec![1u32, 2]);
    assert!(matches!(
        graph.save(&path, &JsonFileSink),
        Err(Error::IoError(_))
    ));
}
