use rand::Rng;

/// Number of random bytes behind each session token.
pub const TOKEN_BYTES: usize = 32;

/// Generate an opaque bearer token from the thread-local CSPRNG
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::thread_rng().gen();
    hex::encode(bytes)
}
