//! Result documents with a small provenance block.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Code revision from `GIT_COMMIT` (build time first, then runtime), else "unknown".
pub fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// `{code_rev, version, params, ...result}`; `result` must serialize to an object.
pub fn document<T: Serialize>(params: Value, result: &T) -> Result<Value> {
    let mut doc = json!({
        "code_rev": code_rev(),
        "version": planar::VERSION,
        "params": params,
    });
    let body = serde_json::to_value(result)?;
    if let (Some(dst), Value::Object(src)) = (doc.as_object_mut(), body) {
        dst.extend(src);
    }
    Ok(doc)
}

/// Pretty-print `doc` to `out` (creating parent directories) or to stdout.
pub fn emit(doc: &Value, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(doc)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
