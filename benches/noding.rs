use criterion::*;
use geo::Rect;

const BBOX: [f64; 2] = [1024., 1024.];

#[path = "utils/random.rs"]
mod random;
use geo_noding::{
    IntersectionAdder, McIndexNoder, Noder, RobustLineIntersector, SegmentString, SimpleNoder,
};
use rand::{rngs::StdRng, SeedableRng};
use random::*;

type Chain = SegmentString<f64, usize>;

fn adder() -> IntersectionAdder<RobustLineIntersector<f64>> {
    IntersectionAdder::new(RobustLineIntersector::new())
}

fn bench_noders(c: &mut Criterion, name: &str, chains: &[Chain]) {
    c.bench_function(&format!("Simple noder - {name}"), |b| {
        b.iter(|| {
            let mut noder = SimpleNoder::new(adder());
            black_box(noder.node(chains.to_vec()).unwrap().len());
        })
    });
    c.bench_function(&format!("Index noder - {name}"), |b| {
        b.iter(|| {
            let mut noder = McIndexNoder::new(adder());
            black_box(noder.node(chains.to_vec()).unwrap().len());
        })
    });
}

fn short_lines(c: &mut Criterion) {
    const NUM_LINES: usize = 512;

    let mut rng = StdRng::seed_from_u64(7);
    let bbox: Rect<f64> = Rect::new([0., 0.], BBOX);
    let line_len = BBOX[0] / 5.;

    let chains: Vec<_> = (0..NUM_LINES)
        .map(|i| {
            let line = uniform_line_with_length(&mut rng, bbox, line_len);
            SegmentString::new(vec![line.start, line.end], i)
        })
        .collect();
    bench_noders(c, "short random lines", &chains);
}

fn random_walks(c: &mut Criterion) {
    const NUM_CHAINS: usize = 32;
    const NUM_POINTS: usize = 64;

    let mut rng = StdRng::seed_from_u64(11);
    let bbox: Rect<f64> = Rect::new([0., 0.], BBOX);

    let chains: Vec<_> = (0..NUM_CHAINS)
        .map(|i| SegmentString::new(random_walk(&mut rng, bbox, NUM_POINTS, 32.), i))
        .collect();
    bench_noders(c, "random walks", &chains);
}

criterion_group!(noding, short_lines, random_walks);
criterion_main!(noding);
