use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(packed) = huffpack::compress(data) {
                let restored = huffpack::decompress(&packed).expect("own container must decode");
                assert_eq!(restored, data);
            }
        });
    }
}
