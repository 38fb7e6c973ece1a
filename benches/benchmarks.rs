//! Performance benchmarks.
//!
//! This module contains benchmarks for the hot paths of the orchestrator:
//! - Access-gate lookups across the full role/page matrix
//! - Login lookups against the identity directory
//! - Snapshot serialization
//!
//! Run with: `cargo bench`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexiscomply::{
    is_allowed, visible_pages, App, Config, PageId, Role, ScriptedCounsel, SessionStore,
    StaticDirectory,
};

fn bench_access_gate(c: &mut Criterion) {
    let pages = [
        PageId::Dashboard,
        PageId::Review,
        PageId::Draft,
        PageId::Templates,
        PageId::Reports,
        PageId::Settings,
        PageId::Integrations,
    ];

    c.bench_function("access_gate_full_matrix", |b| {
        b.iter(|| {
            for role in Role::ALL {
                for page in pages {
                    black_box(is_allowed(black_box(role), black_box(page)));
                }
            }
        });
    });

    c.bench_function("visible_pages_per_role", |b| {
        b.iter(|| {
            for role in Role::ALL {
                black_box(visible_pages(black_box(role)));
            }
        });
    });
}

fn bench_login(c: &mut Criterion) {
    c.bench_function("login_success", |b| {
        b.iter(|| {
            let mut session = SessionStore::new(Arc::new(StaticDirectory::builtin()));
            black_box(session.login("priya.sharma@lexiscomply.ai", "admin123")).ok();
        });
    });

    c.bench_function("login_rejection", |b| {
        b.iter(|| {
            let mut session = SessionStore::new(Arc::new(StaticDirectory::builtin()));
            black_box(session.login("priya.sharma@lexiscomply.ai", "wrong")).ok();
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut app = App::from_parts(
        Config::default(),
        Arc::new(StaticDirectory::builtin()),
        Arc::new(ScriptedCounsel::new()),
    );
    app.login("priya.sharma@lexiscomply.ai", "admin123").ok();

    c.bench_function("snapshot_serialize", |b| {
        b.iter(|| {
            let snapshot = app.snapshot();
            black_box(serde_json::to_string(&snapshot)).ok();
        });
    });
}

criterion_group!(benches, bench_access_gate, bench_login, bench_snapshot);
criterion_main!(benches);
