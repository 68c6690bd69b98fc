//! Integration tests for the embedding API.
//!
//! These drive [`FakerEngine`] the way a proxy host does: one engine, many
//! requests, records collected from a sink, and a reset on unload.

use reqfaker::constants::INVALID_PLACEHOLDER;
use reqfaker::engine::FakerEngine;
use reqfaker::generator::RandRegexGenerator;
use reqfaker::test_utils::{AlwaysRegex, RejectingRegex, engine_with_memory_sink, init_test_logging};
use std::sync::Arc;

#[test]
fn test_session_flow_across_requests() {
    init_test_logging(None);
    let (engine, sink) = engine_with_memory_sink("burp_faker", None);

    let register = engine
        .process_request(
            "POST /register\r\n\r\n{\"user\":\"{{burp_faker.alphanumeric(length=12, tag=user)}}\"}",
            "Proxy",
        )
        .unwrap();
    let login = engine
        .process_request(
            "POST /login\r\n\r\n{\"user\":\"{{burp_faker.alphanumeric(length=12, tag=user)}}\"}",
            "Repeater",
        )
        .unwrap();
    let short = engine
        .process_request("GET /u/{{burp_faker.alphanumeric(6, tag=user)}}", "Repeater")
        .unwrap();

    let user = register.split("\"user\":\"").nth(1).unwrap().trim_end_matches("\"}");
    assert_eq!(user.len(), 12);
    assert!(login.contains(user));
    assert_eq!(short, format!("GET /u/{}", &user[..6]));

    let records = sink.drain();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].label, "Proxy");
    assert_eq!(records[2].value, &user[..6]);
    assert!(sink.records().is_empty());

    let stats = engine.cache_stats();
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
}

#[test]
fn test_unload_releases_tags() {
    let (engine, _) = engine_with_memory_sink("p", None);
    let first = engine.transform("{{p.numeric(30, tag=n)}}", "Proxy");
    engine.reset();
    assert_eq!(engine.cache_stats().entries, 0);
    assert_ne!(engine.transform("{{p.numeric(30, tag=n)}}", "Proxy"), first);
}

#[test]
fn test_regex_capabilities() {
    let text = "{{p.regex([a-z]{3}[0-9]{2})}}";

    let (engine, _) = engine_with_memory_sink("p", Some(Arc::new(AlwaysRegex::new("abc12"))));
    assert_eq!(engine.transform(text, "t"), "abc12");

    let (engine, _) = engine_with_memory_sink("p", Some(Arc::new(RejectingRegex)));
    assert_eq!(engine.transform(text, "t"), INVALID_PLACEHOLDER);

    let (engine, _) = engine_with_memory_sink("p", None);
    assert_eq!(engine.transform(text, "t"), "REGEX_NOT_SUPPORTED([a-z]{3}[0-9]{2})");
    assert!(!engine.menu_entries()[7].enabled);

    let engine = FakerEngine::new("p", Some(Arc::new(RandRegexGenerator::default()))).unwrap();
    let value = engine.transform(text, "t");
    assert!(regex::Regex::new(r"^[a-z]{3}[0-9]{2}$").unwrap().is_match(&value), "{value}");
}

#[test]
fn test_concurrent_hosts_share_tags() {
    let engine = Arc::new(FakerEngine::builder().prefix("p").build().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                (0..50)
                    .map(|_| engine.transform("{{p.upper(10, tag=shared)}}", "worker"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let values: Vec<String> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    assert_eq!(values.len(), 200);
    assert!(values.iter().all(|v| *v == values[0]));
    assert_eq!(engine.cache_stats().misses, 1);
}
