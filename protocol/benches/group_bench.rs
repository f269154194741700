// Sponsored group benchmarks.
//
// Covers transaction id hashing, group id computation, building a full
// sponsored pair, and the client-side cost of signing and encoding the
// relayer submission.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use campustrust_protocol::crypto::CampusKeypair;
use campustrust_protocol::gasless::{PaymentRequest, SponsoredGroup};
use campustrust_protocol::transaction::{
    compute_group_id, encode_signed, sign_transaction, PaymentBuilder, PaymentTransaction,
    SuggestedParams,
};

fn params() -> SuggestedParams {
    SuggestedParams::from_round(40_000_000, 1_000, "testnet-v1.0", "genesis").unwrap()
}

fn payment(sender: &str, amount: u64) -> PaymentTransaction {
    PaymentBuilder::new(&params())
        .sender(sender)
        .receiver("RECEIVER")
        .amount(amount)
        .flat_fee(0)
        .build()
}

fn bench_transaction_id(c: &mut Criterion) {
    let txn = payment("ALICE", 1_000_000);

    c.bench_function("txn/ungrouped_id", |b| {
        b.iter(|| black_box(&txn).ungrouped_id());
    });
}

fn bench_group_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("group/compute_id");

    for size in [2usize, 8, 16] {
        let txns: Vec<_> = (0..size)
            .map(|i| payment(&format!("SENDER{i}"), i as u64))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txns, |b, txns| {
            b.iter(|| compute_group_id(black_box(txns)));
        });
    }

    group.finish();
}

fn bench_build_sponsored_group(c: &mut Criterion) {
    let request = PaymentRequest::new("ALICE", "BOB", 1_000_000);
    let params = params();

    c.bench_function("gasless/build_sponsored_group", |b| {
        b.iter(|| SponsoredGroup::build(black_box(&request), "SPONSOR1", &params));
    });
}

fn bench_sign_and_encode(c: &mut Criterion) {
    let keypair = CampusKeypair::generate();
    let request = PaymentRequest::new(keypair.address(), "BOB", 1_000_000);
    let group = SponsoredGroup::build(&request, "SPONSOR1", &params()).unwrap();

    c.bench_function("gasless/sign_and_encode_submission", |b| {
        b.iter(|| {
            let stx = sign_transaction(group.user(), &keypair);
            let bytes = encode_signed(&stx).unwrap();
            group.clone().into_submission(&bytes).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_transaction_id,
    bench_group_id,
    bench_build_sponsored_group,
    bench_sign_and_encode,
);
criterion_main!(benches);
