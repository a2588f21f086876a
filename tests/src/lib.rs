//! Shared fixtures for sigsuite integration tests

/// Raw `X || Y` coordinates of a fixed P-256 test key.
pub const P256_PUB_HEX: &str = "0e609d4eea6ecac33fd083bf108e90db5a31fbf9239bc5cc19a8a6dd10b61050c746f61b03ab399bcc5d18bd33953b4e73a4fdf7529f58747304a32c4814d24e";

/// Private scalar matching [`P256_PUB_HEX`].
pub const P256_PRIV_HEX: &str = "25590b07bb236b0cdc4052550093684efe4e8123291c11095e1360203c0b1a63";

/// Decode a bare (unprefixed) hex fixture.
pub fn unhex(input: &str) -> Vec<u8> {
    hex::decode(input).expect("fixture hex")
}
