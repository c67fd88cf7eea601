use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let _ = huffpack::decompress_with_limit(data, 1 << 20);
        });
    }
}
