//! Performance benchmarks for submission validation and the in-memory store.
//!
//! These benchmarks measure:
//! - Validation of a well-formed payload
//! - Rejection of payloads at each validation tier
//! - Listing from the in-memory store at different sizes

use contact_intake::models::{ContactSubmission, ContactSubmissionCreate};
use contact_intake::repositories::{InMemorySubmissionRepository, SubmissionRepository};
use contact_intake::validation::validate_submission;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tokio::runtime::Runtime;

fn payload() -> ContactSubmissionCreate {
    ContactSubmissionCreate {
        name: "Test User".to_string(),
        email: "test.user+inbox@mail.example.com".to_string(),
        company: Some("Test Company".to_string()),
        project_type: "aiml".to_string(),
        budget: Some("25k-50k".to_string()),
        message: "We would like help building a recommendation model. ".repeat(20),
    }
}

fn bench_validate_valid(c: &mut Criterion) {
    c.bench_function("validate_valid_submission", |b| {
        b.iter(|| validate_submission(black_box(payload())))
    });
}

fn bench_validate_rejections(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_rejections");

    let mut bad_email = payload();
    bad_email.email = "user@@example.com".to_string();
    group.bench_function("schema_tier", |b| {
        b.iter(|| validate_submission(black_box(bad_email.clone())))
    });

    let mut bad_budget = payload();
    bad_budget.budget = Some("invalid_budget".to_string());
    group.bench_function("domain_tier", |b| {
        b.iter(|| validate_submission(black_box(bad_budget.clone())))
    });

    group.finish();
}

fn bench_list_in_memory(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("list_in_memory");

    for size in [100usize, 1_000, 10_000] {
        let repo = InMemorySubmissionRepository::new();
        rt.block_on(async {
            for _ in 0..size {
                let validated = validate_submission(payload()).unwrap();
                let submission = ContactSubmission::from_validated(validated, None);
                repo.insert(&submission).await.unwrap();
            }
        });

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| rt.block_on(repo.find_page(None, 0, 100)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validate_valid,
    bench_validate_rejections,
    bench_list_in_memory
);
criterion_main!(benches);
