//! Raw document shapes as found in the wild
//!
//! Each struct accepts every historical spelling of its fields at once
//! (`args`/`arguments`, `msg`/`message`, `isSigner`/`signer`, ...). Picking
//! which spelling wins is the normalizer's job, not serde's.

use serde::Deserialize;
use serde_json::Value;

/// Program body (either the document root or its `program` envelope)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProgram {
    pub name: Option<String>,

    pub version: Option<String>,

    /// Codama / early Solita spelling of the program address
    pub public_key: Option<String>,

    /// Anchor 0.30+ spelling of the program address
    pub address: Option<String>,

    pub prefix: Option<String>,

    /// Anchor metadata (legacy: address, 0.30+: name/version)
    pub metadata: Option<RawMetadata>,

    pub accounts: Option<Vec<Value>>,

    pub instructions: Option<Vec<Value>>,

    pub types: Option<Vec<Value>>,

    pub defined_types: Option<Vec<Value>>,

    pub errors: Option<Vec<Value>>,

    pub events: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMetadata {
    pub name: Option<String>,

    pub version: Option<String>,

    pub address: Option<String>,
}

/// `{ "fields": [...] }` wrapper used by `account.data`, `account.type`
/// and `event.type`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFieldList {
    /// Named field objects, or bare types for tuple structs
    pub fields: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    pub name: String,

    #[serde(rename = "type", default)]
    pub ty: Value,

    pub docs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAccount {
    pub name: String,

    pub docs: Option<Vec<String>>,

    pub discriminator: Option<Vec<u8>>,

    pub data: Option<RawFieldList>,

    #[serde(rename = "type")]
    pub ty: Option<RawFieldList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInstruction {
    pub name: String,

    pub docs: Option<Vec<String>>,

    pub discriminator: Option<Vec<u8>>,

    pub accounts: Option<Vec<RawInstructionAccount>>,

    pub args: Option<Vec<RawField>>,

    pub arguments: Option<Vec<RawField>>,
}

/// Instruction account, or a named group of nested accounts
///
/// Flags stay untyped: Codama emits values such as `"isSigner": "either"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInstructionAccount {
    pub name: String,

    pub is_writable: Option<Value>,

    pub writable: Option<Value>,

    /// Pre-0.29 Anchor spelling of `writable`
    pub is_mut: Option<Value>,

    pub is_signer: Option<Value>,

    pub signer: Option<Value>,

    pub is_optional: Option<Value>,

    pub optional: Option<Value>,

    pub docs: Option<Vec<String>>,

    /// Present when this entry is a group
    pub accounts: Option<Vec<RawInstructionAccount>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeDef {
    pub name: String,

    pub docs: Option<Vec<String>>,

    #[serde(rename = "type", default)]
    pub ty: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawError {
    pub name: String,

    pub code: u32,

    pub message: Option<String>,

    pub msg: Option<String>,

    pub docs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub name: String,

    pub docs: Option<Vec<String>>,

    pub discriminator: Option<Vec<u8>>,

    #[serde(rename = "type")]
    pub ty: Option<RawFieldList>,

    pub fields: Option<Vec<Value>>,
}

/// Enum variant: `{"name": ...}` or a bare string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawVariant {
    Named { name: String },
    Bare(String),
}

impl RawVariant {
    pub fn into_name(self) -> String {
        match self {
            RawVariant::Named { name } | RawVariant::Bare(name) => name,
        }
    }
}
