//! End-to-end scenarios through the full pipeline.
//!
//! Each test builds a snapshot export, runs it through [`Analyzer`] and
//! checks the resulting report.

use chrono::{DateTime, Duration, TimeZone, Utc};
use kinship_analyzer::{Analyzer, AnalyzerConfig, Error, Report, View};
use kinship_core::RelationClass;
use kinship_layout::{Canvas, RingKind};
use kinship_rank::{FamilyMember, LayerKind};
use kinship_source::{Channel, SnapshotSource, SourceError};
use serde_json::{json, Value};

// ═══════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════

const ME: &str = "did:me";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn ts(days_ago: i64) -> String {
    (now() - Duration::days(days_ago)).to_rfc3339()
}

fn profile(name: &str) -> Value {
    json!({ "id": format!("did:{name}"), "handle": format!("{name}.test") })
}

fn profiles(names: &[&str]) -> Value {
    Value::Array(names.iter().map(|n| profile(n)).collect())
}

fn numbered(prefix: &str, n: usize) -> Value {
    Value::Array((0..n).map(|i| profile(&format!("{prefix}{i:02}"))).collect())
}

fn snapshot(replies: Value, likes: Value, following: Value, followers: Value) -> Value {
    json!({
        "account": { "id": ME, "handle": "me.test", "displayName": "Me" },
        "replies": replies,
        "likes": likes,
        "following": following,
        "followers": followers,
    })
}

fn incoming_reply(id: &str, from: &str, days_ago: i64) -> Value {
    json!({
        "id": id,
        "kind": "reply",
        "author": profile(from),
        "replyTo": { "id": ME, "handle": "me.test" },
        "createdAt": ts(days_ago),
    })
}

fn like(subject: &str, author: &str, days_ago: i64) -> Value {
    json!({ "subject": subject, "subjectAuthor": profile(author), "likedAt": ts(days_ago) })
}

fn run(snapshot: Value) -> Report {
    run_with(AnalyzerConfig::default(), snapshot)
}

fn run_with(config: AnalyzerConfig, snapshot: Value) -> Report {
    let source = SnapshotSource::from_json(&snapshot.to_string()).unwrap();
    Analyzer::new(config)
        .unwrap()
        .analyze(&source, "me.test", now(), Canvas::square(1080), &mut |_| {})
        .unwrap()
}

fn ranked_handles(report: &Report) -> Vec<&str> {
    report.ranked.iter().map(|n| n.profile.handle.as_str()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn scenario_a_replies_and_likes_today() {
    let report = run(snapshot(
        json!([incoming_reply("r1", "alice", 0), incoming_reply("r2", "alice", 0)]),
        json!([like("c1", "alice", 0), like("c2", "alice", 0), like("c3", "alice", 0)]),
        json!([]),
        json!([]),
    ));

    assert_eq!(report.ranked.len(), 1);
    let alice = &report.ranked[0];
    assert_eq!(alice.profile.handle, "alice.test");
    assert_eq!(alice.weight, 7.5);
    assert_eq!(alice.score, 7.5);
    assert_eq!(alice.relation, RelationClass::None);
    assert_eq!(alice.interactions, 5);
    assert_eq!(alice.last_interaction, Some(now()));
}

#[test]
fn scenario_b_relationship_classes() {
    let report = run(snapshot(
        json!([]),
        json!([]),
        profiles(&["a", "b"]),
        profiles(&["b", "c"]),
    ));

    assert_eq!(ranked_handles(&report), ["b.test", "a.test", "c.test"]);
    let classes: Vec<_> = report.ranked.iter().map(|n| n.relation).collect();
    assert_eq!(
        classes,
        [RelationClass::Mutual, RelationClass::FollowingOnly, RelationClass::FollowerOnly]
    );
    assert_eq!(report.stats.relations.mutual, 1);
    assert_eq!(report.stats.relations.following_only, 1);
    assert_eq!(report.stats.relations.follower_only, 1);

    let family = &report.family;
    assert_eq!(family.layers().len(), 3);
    assert_eq!(family.partner().map(|n| n.profile.handle.as_str()), Some("b.test"));
}

#[test]
fn scenario_c_forty_candidates_use_three_rings() {
    let report = run(snapshot(json!([]), json!([]), json!([]), numbered("f", 40)));

    let kinds: Vec<_> = report.radial.rings.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, [RingKind::Core, RingKind::Inner, RingKind::Outer]);
    assert_eq!(report.radial.node_count(), 40);
    for ring in &report.radial.rings {
        assert!(ring.len() <= ring.capacity);
    }
}

#[test]
fn scenario_d_ten_candidates_fill_one_ring() {
    let report = run(snapshot(json!([]), json!([]), numbered("g", 10), json!([])));

    assert_eq!(report.radial.rings.len(), 1);
    let ring = &report.radial.rings[0];
    assert_eq!(ring.capacity, 20);
    assert_eq!(ring.len(), 10);
}

#[test]
fn scenario_e_no_candidates_no_rings() {
    let report = run(snapshot(json!([]), json!([]), json!([]), json!([])));

    assert!(report.ranked.is_empty());
    assert!(report.radial.is_empty());
    assert_eq!(report.stats.candidates, 0);

    // only the account remains in the family view
    let layers = report.family.layers();
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].kind, LayerKind::Center);
    assert_eq!(layers[0].members.len(), 1);
}

#[test]
fn scenario_f_five_following_only_fill_parents() {
    let report = run(snapshot(
        json!([]),
        json!([]),
        profiles(&["e", "c", "a", "d", "b"]),
        json!([]),
    ));

    let parents = report.family.layer(LayerKind::Parents).unwrap();
    let handles: Vec<_> = parents.members.iter().map(|m| m.profile().handle.as_str()).collect();
    assert_eq!(handles, ["a.test", "b.test"]);

    assert!(report.family.layer(LayerKind::Children).is_none());
    assert!(report.family.partner().is_none());
    let center = report.family.layer(LayerKind::Center).unwrap();
    assert!(matches!(center.members.as_slice(), [FamilyMember::Account { .. }]));
}

// ═══════════════════════════════════════════════════════════════════════════
// Full pipeline
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn relation_outranks_interaction_weight() {
    let report = run(snapshot(
        json!([incoming_reply("r1", "chatty", 0), incoming_reply("r2", "chatty", 0)]),
        json!([]),
        json!([]),
        profiles(&["fan"]),
    ));

    // follower-only (50) beats an unconnected 6.0
    assert_eq!(ranked_handles(&report), ["fan.test", "chatty.test"]);
}

#[test]
fn newer_interaction_ranks_first() {
    let report = run(snapshot(
        json!([]),
        json!([like("c1", "old", 3), like("c2", "new", 1)]),
        json!([]),
        json!([]),
    ));

    assert_eq!(ranked_handles(&report), ["new.test", "old.test"]);
    assert!(report.ranked[0].weight > report.ranked[1].weight);
}

#[test]
fn account_never_appears_in_outputs() {
    let report = run(snapshot(
        json!([
            {
                "id": "self-reply", "kind": "reply",
                "author": { "id": ME }, "replyTo": { "id": ME },
                "createdAt": ts(0),
            },
            incoming_reply("r1", "a", 1),
        ]),
        json!([like("own", "me", 0), { "subject": "own2", "subjectAuthor": { "id": ME }, "likedAt": ts(0) }]),
        json!([{ "id": ME }, profile("a")]),
        json!([{ "id": ME }]),
    ));

    assert!(report.ranked.iter().all(|n| n.id().as_str() != ME));
    assert!(report
        .radial
        .rings
        .iter()
        .flat_map(|r| &r.members)
        .all(|p| p.node.id().as_str() != ME));
    assert_eq!(report.stats.interactions.self_interactions, 3);
    assert_eq!(report.stats.interactions.attributed, 1);
    assert_eq!(report.stats.relations.following_only, 1);
    assert_eq!(report.stats.relations.follower_only, 0);
}

#[test]
fn malformed_records_are_counted_not_fatal() {
    let report = run(snapshot(
        json!([
            incoming_reply("r1", "a", 0),
            { "id": "r2", "kind": "reply", "author": profile("a"), "replyTo": { "id": ME }, "createdAt": "soon" },
            { "id": "r3", "kind": "boost", "author": profile("a"), "createdAt": ts(0) },
        ]),
        json!([{ "subjectAuthor": profile("b"), "likedAt": ts(0) }]),
        json!([{ "handle": "nobody" }]),
        json!([]),
    ));

    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.stats.rejected.posts, 2);
    assert_eq!(report.stats.rejected.likes, 1);
    assert_eq!(report.stats.rejected.following, 1);
    assert_eq!(report.stats.rejected.total(), 4);
}

#[test]
fn selection_is_capped_and_layout_follows() {
    let mut config = AnalyzerConfig::default();
    config.rank.max_nodes = 36;
    let report = run_with(config, snapshot(json!([]), json!([]), numbered("f", 60), json!([])));

    assert_eq!(report.stats.candidates, 60);
    assert_eq!(report.stats.selected, 36);
    assert_eq!(report.ranked.len(), 36);
    let counts: Vec<_> = report.radial.rings.iter().map(|r| r.len()).collect();
    assert_eq!(counts, [6, 12, 18]);
}

#[test]
fn same_input_same_report() {
    let input = snapshot(
        json!([incoming_reply("r1", "a", 2), incoming_reply("r2", "b", 2)]),
        json!([like("c1", "c", 5)]),
        numbered("f", 20),
        numbered("g", 20),
    );
    assert_eq!(run(input.clone()), run(input));
}

#[test]
fn unknown_handle_fails() {
    let source = SnapshotSource::from_json(&snapshot(json!([]), json!([]), json!([]), json!([])).to_string()).unwrap();
    let err = Analyzer::new(AnalyzerConfig::default())
        .unwrap()
        .analyze(&source, "stranger.test", now(), Canvas::square(800), &mut |_| {})
        .unwrap_err();

    assert!(matches!(err, Error::Source(SourceError::UserNotFound { .. })));
}

#[test]
fn missing_channel_fails() {
    let source = SnapshotSource::from_json(&json!({ "account": { "id": ME, "handle": "me.test" }, "replies": [] }).to_string()).unwrap();
    let err = Analyzer::new(AnalyzerConfig::default())
        .unwrap()
        .analyze(&source, "me.test", now(), Canvas::square(800), &mut |_| {})
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Source(SourceError::DataUnavailable {
            channel: Channel::Likes,
            ..
        })
    ));
}

#[test]
fn progress_reported_for_every_channel() {
    let source = SnapshotSource::from_json(&snapshot(json!([]), json!([]), numbered("f", 5), numbered("g", 3)).to_string())
        .unwrap()
        .with_page_size(2);
    let mut pages = Vec::new();
    Analyzer::new(AnalyzerConfig::default())
        .unwrap()
        .analyze(&source, "me.test", now(), Canvas::square(800), &mut |p| pages.push(p.channel))
        .unwrap();

    assert_eq!(
        pages,
        [
            Channel::Following,
            Channel::Following,
            Channel::Following,
            Channel::Followers,
            Channel::Followers
        ]
    );
}

#[test]
fn views_serialize() {
    let report = run(snapshot(json!([]), json!([]), profiles(&["a"]), profiles(&["a"])));

    let ranked = report.view(View::Ranked).unwrap();
    assert_eq!(ranked[0]["relation"], "mutual");
    assert_eq!(ranked[0]["profile"]["handle"], "a.test");

    let family = report.view(View::Family).unwrap();
    assert_eq!(family["layers"][0]["kind"], "center");
    assert_eq!(family["layers"][0]["members"][0]["role"], "account");

    let radial = report.view(View::Radial).unwrap();
    assert_eq!(radial["rings"][0]["kind"], "core");

    let all = report.view(View::All).unwrap();
    assert_eq!(all["account"]["id"], ME);
    assert_eq!(all["stats"]["candidates"], 1);
}
