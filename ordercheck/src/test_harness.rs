//! Builders for synthetic engine logs.
//!
//! The line shapes mirror what the engine's replicas actually write, so
//! tests exercise the same text the auditor sees in production: a
//! timestamp, the emitting class and line, a level, `GID`/`SID`/`RID`
//! attributes and a trailing message.

use std::fs;
use std::path::{Path, PathBuf};

/// Deterministic UUID-shaped id from a small seed.
pub fn uuid_like(seed: u32) -> String {
    format!("{seed:08x}-0000-4000-8000-000000000000")
}

/// One milestone line as the replica's request handler writes it.
pub fn milestone_line(gid: u32, sid: u32, rid: &str) -> String {
    format!(
        "2024-08-14T21:16:22.243746502 dev.agst.byzcast.replica.RequestHandler:111 INFO \
         GID={gid} SID={sid} RID={rid} source=CLIENT Request locally handled"
    )
}

/// A line the parser must ignore.
pub fn noise_line(gid: u32, sid: u32, message: &str) -> String {
    format!(
        "2024-08-14T21:16:22.243746502 dev.agst.byzcast.replica.RequestHandler:86 INFO \
         GID={gid} SID={sid} {message}"
    )
}

/// A batch cache line mentioning `id` the way the server prints batch
/// contents.
pub fn cache_line(id: &str, message: &str) -> String {
    format!(
        "2024-08-14T21:16:22.243746502 dev.agst.byzcast.server.ServerHandler:44 INFO \
         GID=1 SID=0 {message} [{id}]"
    )
}

/// Full log text for one replica: a milestone line per id, noise
/// interleaved.
pub fn replica_log(gid: u32, sid: u32, rids: &[&str]) -> String {
    let mut text = String::new();
    text.push_str(&noise_line(gid, sid, "Request is client request"));
    text.push('\n');
    for rid in rids {
        text.push_str(&noise_line(
            gid,
            sid,
            "Request has reached minimum receive count",
        ));
        text.push('\n');
        text.push_str(&milestone_line(gid, sid, rid));
        text.push('\n');
    }
    text
}

/// Tab-separated client stats content with the standard header.
pub fn stats_text(latencies: &[i64]) -> String {
    let mut text = String::from("ORDER\tLATENCY\tABS\tTYPE\n");
    for (i, lat) in latencies.iter().enumerate() {
        text.push_str(&format!("{i}\t{lat}\t1723667782\tHANDLED\n"));
    }
    text
}

/// Write a replica log named the way the local execution tooling names
/// them (`g{gid}_s{sid}.log`) and return its path.
pub fn write_replica_log(dir: &Path, gid: u32, sid: u32, rids: &[&str]) -> PathBuf {
    write_file(dir, &format!("g{gid}_s{sid}.log"), &replica_log(gid, sid, rids))
}

/// Write arbitrary content under `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
