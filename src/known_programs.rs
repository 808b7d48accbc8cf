//! Well-known deployed programs
//!
//! Client boilerplate for these is not generated: they are shared
//! infrastructure with their own client libraries. Matching is exact
//! string equality on the base58 address.

/// A well-known program identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownProgram {
    pub name: &'static str,
    pub public_key: &'static str,
}

const fn known(name: &'static str, public_key: &'static str) -> KnownProgram {
    KnownProgram { name, public_key }
}

/// Allow-list of standard program addresses
pub const KNOWN_PROGRAMS: &[KnownProgram] = &[
    known("System Program", "11111111111111111111111111111111"),
    known("Token Program", "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"),
    known("Token-2022 Program", "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb"),
    known("Associated Token Account Program", "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"),
    known("Memo Program", "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr"),
    known("Token Metadata Program", "metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s"),
    known("Address Lookup Table Program", "AddressLookupTab1e1111111111111111111111111"),
    known("BPF Loader", "BPFLoader2111111111111111111111111111111111"),
    known("BPF Loader (deprecated)", "BPFLoader1111111111111111111111111111111111"),
    known("BPF Upgradeable Loader", "BPFLoaderUpgradeab1e11111111111111111111111"),
    known("Loader v4", "LoaderV411111111111111111111111111111111111"),
    known("Compute Budget Program", "ComputeBudget111111111111111111111111111111"),
    known("Config Program", "Config1111111111111111111111111111111111111"),
    known("Stake Program", "Stake11111111111111111111111111111111111111"),
    known("Vote Program", "Vote111111111111111111111111111111111111111"),
    known("Ed25519 SigVerify Program", "Ed25519SigVerify111111111111111111111111111"),
    known("Secp256k1 SigVerify Program", "KeccakSecp256k11111111111111111111111111111"),
];

/// Find the well-known program with this exact address
pub fn lookup(public_key: &str) -> Option<&'static KnownProgram> {
    KNOWN_PROGRAMS.iter().find(|p| p.public_key == public_key)
}
