use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use outshape::{validator::*, Schema, SchemaBuilder, Value};

/// Schema shaped like a BGP all-summary: vrf -> neighbor -> address family
/// -> session counters.
fn summary_schema() -> Schema {
    let session = MapValidator::new()
        .req_add("version", IntValidator::new().min(1u8).build())
        .req_add("as", IntValidator::new().min(0u8).build())
        .req_add("msg_rcvd", IntValidator::new().min(0u8).build())
        .req_add("msg_sent", IntValidator::new().min(0u8).build())
        .req_add("up_down", StrValidator::new().build())
        .req_add(
            "state_pfxrcd",
            MultiValidator::new()
                .any_of_add(IntValidator::new().min(0u8).build())
                .any_of_add(StrValidator::new().build())
                .build(),
        )
        .opt_add("local_as", IntValidator::new().build())
        .build();
    SchemaBuilder::new(
        MapValidator::new()
            .req_add(
                "vrf",
                MapValidator::new()
                    .values(
                        MapValidator::new()
                            .req_add(
                                "neighbor",
                                MapValidator::new()
                                    .values(
                                        MapValidator::new()
                                            .req_add(
                                                "address_family",
                                                MapValidator::new().values(session).build(),
                                            )
                                            .build(),
                                    )
                                    .build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .build(),
    )
    .name("show_bgp_all_summary")
    .build()
}

fn summary_value(neighbors: usize) -> Value {
    let mut vrfs = serde_json::Map::new();
    let mut neighbor_map = serde_json::Map::new();
    for i in 0..neighbors {
        neighbor_map.insert(
            format!("10.16.2.{}", i),
            serde_json::json!({
                "address_family": {
                    "ipv4 unicast": {
                        "version": 4,
                        "as": 65000,
                        "msg_rcvd": 27,
                        "msg_sent": 31,
                        "up_down": "00:20:33",
                        "state_pfxrcd": 2,
                        "local_as": 65001,
                    }
                }
            }),
        );
    }
    vrfs.insert(
        "default".to_owned(),
        serde_json::json!({ "neighbor": neighbor_map }),
    );
    serde_json::from_value(serde_json::json!({ "vrf": vrfs })).unwrap()
}

fn bench_validate(c: &mut Criterion) {
    let schema = summary_schema();
    let small = summary_value(4);
    let large = summary_value(256);

    c.bench_function("validate_summary_4", |b| {
        b.iter(|| schema.validate(black_box(&small)).unwrap())
    });
    c.bench_function("validate_summary_256", |b| {
        b.iter(|| schema.validate(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
