//! String-to-seed hashes. Both operate on UTF-16 code units with 32-bit
//! wrapping arithmetic and return the absolute value of the signed result, so
//! the seeds match the values the storefront has always produced.

/// `h = c + (h << 6) + (h << 16) - h` over the seed.
pub fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = i32::from(unit)
            .wrapping_add(hash.wrapping_shl(6))
            .wrapping_add(hash.wrapping_shl(16))
            .wrapping_sub(hash);
    }
    hash.unsigned_abs()
}

/// `h = (h << 5) - h + c` over the seed. Used by the admin demo listing.
pub fn hash_seed_31(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
