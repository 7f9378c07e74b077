// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use disks_model::state::DiskState;
use disks_sort::{
    lawnmower::LawnmowerSorter, left_to_right::LeftToRightSorter, sorter::DiskSorter,
};
use std::hint::black_box;

const LIGHT_COUNTS: [usize; 4] = [16, 64, 256, 1024];

fn bench_sorters(c: &mut Criterion) {
    let sorters: [Box<dyn DiskSorter>; 2] = [
        Box::new(LeftToRightSorter::default()),
        Box::new(LawnmowerSorter::default()),
    ];

    let mut group = c.benchmark_group("alternating_disks");
    for n in LIGHT_COUNTS {
        let row = DiskState::new(n);
        group.throughput(Throughput::Elements(row.inversion_count()));

        for sorter in &sorters {
            group.bench_with_input(BenchmarkId::new(sorter.name(), n), &row, |b, row| {
                b.iter(|| {
                    let result = sorter
                        .sort(black_box(row.clone()))
                        .unwrap_or_else(|e| panic!("benchmark row rejected: {e}"));
                    black_box(result.swap_count())
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sorters);
criterion_main!(benches);
