//! idlview - Browse Solana program IDLs and generate client snippets
//!
//! IDL documents come in several historically diverged shapes: Anchor
//! before and after 0.29, Codama-style type nodes, documents wrapped in a
//! `program` envelope. This library reconciles all of them into one
//! canonical [`Program`], formats type nodes into readable signatures, and
//! generates client boilerplate per entity.
//!
//! # Quick Start
//!
//! ```
//! use idlview::{format_type, generate, load_program_from_str, SnippetTarget};
//!
//! let program = load_program_from_str(r#"{
//!     "name": "vault",
//!     "instructions": [{
//!         "name": "deposit",
//!         "accounts": [{ "name": "user", "isMut": true, "isSigner": true }],
//!         "args": [{ "name": "amount", "type": { "kind": "numberTypeNode", "format": "u64", "endian": "le" } }]
//!     }]
//! }"#)?;
//!
//! let deposit = &program.instructions[0];
//! assert_eq!(format_type(&deposit.args[0].ty), "u64 (le)");
//!
//! let snippet = generate(SnippetTarget::Instruction(deposit), &program);
//! assert!(snippet.code().contains(".deposit(amount)"));
//! # Ok::<(), idlview::ViewerError>(())
//! ```
//!
//! # Loading IDL from Different Sources
//!
//! ```ignore
//! use idlview::{fetch_program_from_url, load_program_from_file, normalize};
//!
//! // From local file
//! let program = load_program_from_file("./target/idl/my_program.json")?;
//!
//! // From URL
//! let program = fetch_program_from_url("https://raw.githubusercontent.com/...", 30).await?;
//!
//! // From an already parsed document
//! let program = normalize(&value)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod idl;
pub mod known_programs;
pub mod snippet;

// Public re-exports for library users
pub use error::{ViewerError, ViewerResult};
pub use format::{format_discriminator, format_type};
pub use idl::{
    // Loading functions
    fetch_program_from_url,
    load_program,
    load_program_from_file,
    load_program_from_str,
    normalize,
    // Types
    Account,
    ArrayLength,
    EntityKind,
    ErrorType,
    Event,
    Field,
    Instruction,
    InstructionAccount,
    Program,
    ProgramMetadata,
    TypeDef,
    TypeNode,
};
pub use snippet::{generate, Snippet, SnippetTarget};
