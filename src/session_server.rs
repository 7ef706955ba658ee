use anyhow::Result;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

use crate::{search::score_with, DatumEngine};

/// Serves one session over stdin/stdout, one JSON-RPC 2.0 message per line.
pub fn run(engine: &mut DatumEngine) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serve(engine, stdin.lock(), &mut out)
}

pub fn serve(engine: &mut DatumEngine, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let msg: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "dropping malformed message");
                write_error(out, &Value::Null, -32700, &format!("parse error: {e}"))?;
                continue;
            }
        };

        let id = msg.get("id").cloned().unwrap_or(Value::Null);
        let method = msg["method"].as_str().unwrap_or("");
        let params = msg.get("params").cloned().unwrap_or(Value::Null);

        if method.starts_with("notifications/") {
            continue;
        }

        debug!(method, "dispatching");
        match dispatch(engine, method, &params) {
            Ok(payload) => write_ok(out, &id, payload)?,
            Err(e) => write_error(out, &id, -32603, &e.to_string())?,
        }
    }
    Ok(())
}


fn dispatch(engine: &mut DatumEngine, method: &str, params: &Value) -> Result<Value> {
    match method {
        "initialize" => Ok(handle_initialize(engine)),
        "query" => {
            let text = params["text"].as_str().unwrap_or("");
            let changed = engine.set_query(text);
            Ok(json!({ "changed": changed, "view": engine.view() }))
        }
        "toggle" => {
            let category = params["category"].as_str().unwrap_or("");
            anyhow::ensure!(!category.is_empty(), "toggle requires 'category'");
            let state = engine.toggle_category(category)?;
            Ok(json!({ "category": category, "state": state, "graph": engine.graph() }))
        }
        "graph" => Ok(serde_json::to_value(engine.graph())?),
        "connectors" => Ok(serde_json::to_value(engine.graph().connectors())?),
        "hub" => Ok(serde_json::to_value(engine.hub())?),
        "view" => Ok(serde_json::to_value(engine.view())?),
        "score" => {
            let name = params["name"].as_str().unwrap_or("");
            let query = params["query"].as_str().unwrap_or("");
            anyhow::ensure!(!name.is_empty(), "score requires 'name'");
            Ok(json!({ "score": score_with(name, query, engine.config().fuzzy) }))
        }
        other => anyhow::bail!("unknown method: {other}"),
    }
}

fn handle_initialize(engine: &DatumEngine) -> Value {
    json!({
        "serverInfo": { "name": "datum", "version": env!("CARGO_PKG_VERSION") },
        "methods": ["query", "toggle", "graph", "connectors", "hub", "view", "score"],
        "categories": engine.catalog().categories().iter().map(|c| &c.id).collect::<Vec<_>>(),
        "config": engine.config(),
    })
}


fn write_ok(out: &mut impl Write, id: &Value, result: Value) -> Result<()> {
    let envelope = json!({ "jsonrpc": "2.0", "id": id, "result": result });
    writeln!(out, "{}", serde_json::to_string(&envelope)?)?;
    out.flush()?;
    Ok(())
}

fn write_error(out: &mut impl Write, id: &Value, code: i32, message: &str) -> Result<()> {
    let envelope = json!({
        "jsonrpc": "2.0", "id": id,
        "error": { "code": code, "message": message }
    });
    writeln!(out, "{}", serde_json::to_string(&envelope)?)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn session(lines: &[&str]) -> Vec<Value> {
        let mut engine = DatumEngine::with_sample_data(Config::default());
        let input = lines.join("\n");
        let mut out = Vec::new();
        serve(&mut engine, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn query_returns_search_view() {
        let replies = session(&[
            r#"{"jsonrpc":"2.0","id":1,"method":"query","params":{"text":"RFI"}}"#,
        ]);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["id"], 1);
        assert_eq!(replies[0]["result"]["changed"], true);
        assert_eq!(replies[0]["result"]["view"]["mode"], "search");
    }

    #[test]
    fn connectors_route_every_visible_edge() {
        let replies = session(&[
            r#"{"id":1,"method":"query","params":{"text":"RFI"}}"#,
            r#"{"id":2,"method":"connectors"}"#,
        ]);
        let routed = replies[1]["result"].as_array().unwrap();
        assert_eq!(routed.len(), 4);
        assert_eq!(routed[0]["edge_id"], "search-rfis");
        let file_link = routed
            .iter()
            .find(|r| r["edge_id"] == "rfis-rfi-1")
            .unwrap();
        assert_eq!(file_link["connector"]["source_side"], "bottom");
        assert_eq!(file_link["connector"]["target_side"], "top");
    }

    #[test]
    fn toggle_reports_new_state() {
        let replies = session(&[
            r#"{"id":1,"method":"query","params":{"text":"RFI"}}"#,
            r#"{"id":2,"method":"toggle","params":{"category":"rfis"}}"#,
        ]);
        assert_eq!(replies[1]["result"]["state"], "explicit_collapsed");
    }

    #[test]
    fn errors_use_jsonrpc_codes() {
        let replies = session(&[
            "not json",
            r#"{"id":7,"method":"toggle","params":{"category":"invoices"}}"#,
            r#"{"id":8,"method":"bogus"}"#,
        ]);
        assert_eq!(replies[0]["error"]["code"], -32700);
        assert_eq!(replies[1]["error"]["code"], -32603);
        assert_eq!(replies[1]["id"], 7);
        assert!(replies[2]["error"]["message"].as_str().unwrap().contains("bogus"));
    }

    #[test]
    fn notifications_and_blank_lines_are_ignored() {
        let replies = session(&[
            "",
            r#"{"method":"notifications/ready"}"#,
            r#"{"id":3,"method":"hub"}"#,
        ]);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["result"]["platforms"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn score_method_uses_configured_fuzzy_mode() {
        let replies = session(&[
            r#"{"id":1,"method":"score","params":{"name":"A-101_Site_Plan","query":"site"}}"#,
        ]);
        assert_eq!(replies[0]["result"]["score"], 80);
    }
}
