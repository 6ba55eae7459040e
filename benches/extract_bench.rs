//! Criterion benchmarks for the two extraction passes.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use ordanet::record::RecordLoader;
use ordanet::synonym::{SenseIndex, extract_synonyms};

/// Generate a synthetic dump with `senses` concept records and one synonymy
/// relation between each pair of neighbouring senses.
fn generate_dump(senses: usize) -> String {
    let mut blocks = Vec::with_capacity(senses * 2);
    for id in 0..senses {
        blocks.push(format!(
            "<rdf:Description rdf:about=\"http://orda.net/orð{id}_fsh_({id})\">\n\
             \t<rdf:type rdf:resource=\"http://www.w3.org/2004/02/skos/core#Concept\"/>\n\
             \t<rdfs:label xml:lang=\"is\">orð&#160;{id}</rdfs:label>\n\
             </rdf:Description>"
        ));
    }
    for id in 1..senses {
        let prev = id - 1;
        blocks.push(format!(
            "<rdf:Description rdf:about=\"http://orda.net/senseRelation_({prev}-{id})\">\n\
             \t<vartrans:category rdf:resource=\"http://www.lexinfo.net/ontology/2.0/lexinfo#synonym\"/>\n\
             </rdf:Description>"
        ));
    }
    blocks.join("\n\n")
}

fn bench_extraction(c: &mut Criterion) {
    let dump = generate_dump(10_000);
    let loader = RecordLoader::default();
    let records = loader.parse(&dump);
    let index = SenseIndex::build(&records);

    let mut group = c.benchmark_group("extraction");
    group.throughput(Throughput::Bytes(dump.len() as u64));

    group.bench_function("load", |b| b.iter(|| loader.parse(black_box(&dump))));
    group.bench_function("build_index", |b| {
        b.iter(|| SenseIndex::build(black_box(&records)))
    });
    group.bench_function("extract_synonyms", |b| {
        b.iter(|| extract_synonyms(black_box(&records), black_box(&index)))
    });

    group.finish();
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
