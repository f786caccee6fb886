// Dweve IniLine - Streaming INI Line Parser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Throughput of `IniReader::read_next` on generated documents.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iniline::{IniReader, PatternSet, ReadStatus, Record};
use std::io::Cursor;

fn generate(sections: usize, keys_per_section: usize) -> String {
    let mut doc = String::new();
    for s in 0..sections {
        doc.push_str(&format!("# section {s}\n[section_{s}]\n"));
        for k in 0..keys_per_section {
            doc.push_str(&format!("  key_{k} = value number {k} of {s}  \n"));
        }
        doc.push('\n');
    }
    doc
}

fn bench_read_next(c: &mut Criterion) {
    let patterns = PatternSet::shared();
    let mut group = c.benchmark_group("read_next");

    for &sections in &[10usize, 100, 1000] {
        let doc = generate(sections, 20);
        group.throughput(Throughput::Bytes(doc.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &doc, |b, doc| {
            b.iter(|| {
                let mut reader = IniReader::new(Cursor::new(doc.as_str()), patterns.clone());
                let mut record = Record::new();
                let mut count = 0usize;
                while let Ok(ReadStatus::Matched) = reader.read_next(&mut record) {
                    count += 1;
                }
                black_box(count)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read_next);
criterion_main!(benches);
