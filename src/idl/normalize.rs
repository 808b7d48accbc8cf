//! Schema normalization
//!
//! Turns a parsed IDL document in any of the supported shapes into a
//! canonical [`Program`]. Each synonym rule is a small fallback chain so it
//! can be read (and tested) on its own.

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::raw::{
    RawAccount, RawError, RawEvent, RawField, RawFieldList, RawInstruction, RawInstructionAccount,
    RawProgram, RawTypeDef, RawVariant,
};
use super::types::{
    Account, ArrayLength, ErrorType, Event, Field, Instruction, InstructionAccount, Program,
    ProgramMetadata, TypeDef, TypeNode,
};
use crate::error::{ViewerError, ViewerResult};

/// Normalize a parsed IDL document into a canonical [`Program`].
///
/// Fails as a whole on malformed structure; absent optional data is never
/// an error.
pub fn normalize(raw: &Value) -> ViewerResult<Program> {
    let body = program_body(raw)?;
    let program: RawProgram = RawProgram::deserialize_from(body)?;

    let metadata = resolve_metadata(&program);

    let accounts = decode_list::<RawAccount>("account", program.accounts)?
        .into_iter()
        .map(account)
        .collect::<ViewerResult<Vec<_>>>()?;

    let instructions = decode_list::<RawInstruction>("instruction", program.instructions)?
        .into_iter()
        .map(instruction)
        .collect::<ViewerResult<Vec<_>>>()?;

    let types = decode_list::<RawTypeDef>("type", resolve_types(program.types, program.defined_types))?
        .into_iter()
        .map(type_def)
        .collect::<ViewerResult<Vec<_>>>()?;

    let errors = decode_list::<RawError>("error", program.errors)?
        .into_iter()
        .map(error_type)
        .collect::<ViewerResult<Vec<_>>>()?;

    let events = decode_list::<RawEvent>("event", program.events)?
        .into_iter()
        .map(event)
        .collect::<ViewerResult<Vec<_>>>()?;

    debug!(
        "normalized program {:?}: {} accounts, {} instructions, {} types, {} errors, {} events",
        metadata.name,
        accounts.len(),
        instructions.len(),
        types.len(),
        errors.len(),
        events.len()
    );

    Ok(Program {
        metadata,
        accounts,
        instructions,
        types,
        errors,
        events,
    })
}

impl RawProgram {
    fn deserialize_from(body: &Value) -> ViewerResult<Self> {
        serde_json::from_value(body.clone()).map_err(|e| ViewerError::format("program body", e))
    }
}

// ============================================================================
// Fallback chains
// ============================================================================

/// `raw.program` if present, else `raw` itself
fn program_body(raw: &Value) -> ViewerResult<&Value> {
    if !raw.is_object() {
        return Err(ViewerError::FormatError(format!(
            "expected a JSON object at the document root, found {}",
            describe(raw)
        )));
    }

    match raw.get("program") {
        None | Some(Value::Null) => Ok(raw),
        Some(envelope) if envelope.is_object() => {
            debug!("using `program` envelope as document body");
            Ok(envelope)
        }
        Some(other) => Err(ViewerError::FormatError(format!(
            "`program` must be an object, found {}",
            describe(other)
        ))),
    }
}

/// `types` if present and non-empty, else `definedTypes`
fn resolve_types(types: Option<Vec<Value>>, defined_types: Option<Vec<Value>>) -> Option<Vec<Value>> {
    match types {
        Some(types) if !types.is_empty() => Some(types),
        _ => {
            if defined_types.is_some() {
                debug!("resolved type list from `definedTypes`");
            }
            defined_types
        }
    }
}

fn resolve_metadata(program: &RawProgram) -> ProgramMetadata {
    let meta = program.metadata.as_ref();
    ProgramMetadata {
        name: program
            .name
            .clone()
            .or_else(|| meta.and_then(|m| m.name.clone())),
        version: program
            .version
            .clone()
            .or_else(|| meta.and_then(|m| m.version.clone())),
        public_key: program
            .public_key
            .clone()
            .or_else(|| program.address.clone())
            .or_else(|| meta.and_then(|m| m.address.clone())),
        prefix: program.prefix.clone(),
    }
}

/// `data.fields` else `type.fields`
fn account_fields(data: Option<RawFieldList>, ty: Option<RawFieldList>) -> Vec<Value> {
    data.and_then(|d| d.fields)
        .or_else(|| ty.and_then(|t| t.fields))
        .unwrap_or_default()
}

/// `type.fields` else `fields`
fn event_fields(ty: Option<RawFieldList>, fields: Option<Vec<Value>>) -> Vec<Value> {
    ty.and_then(|t| t.fields).or(fields).unwrap_or_default()
}

/// `args` else `arguments`
fn instruction_args(args: Option<Vec<RawField>>, arguments: Option<Vec<RawField>>) -> Vec<RawField> {
    args.or(arguments).unwrap_or_default()
}

/// `message` else `msg`; empty strings count as absent
fn error_message(message: Option<String>, msg: Option<String>) -> Option<String> {
    message
        .filter(|m| !m.is_empty())
        .or_else(|| msg.filter(|m| !m.is_empty()))
}

/// Any truthy spelling sets the flag: `true`, a non-empty string, a
/// non-zero number, or any array/object
fn flag(sources: &[Option<Value>]) -> bool {
    sources.iter().flatten().any(truthy)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Docs are kept only when present and non-empty
fn docs(raw: Option<Vec<String>>) -> Option<Vec<String>> {
    raw.filter(|d| !d.is_empty())
}

// ============================================================================
// Entity conversion
// ============================================================================

fn decode_list<T: DeserializeOwned>(what: &str, items: Option<Vec<Value>>) -> ViewerResult<Vec<T>> {
    items
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            if !item.is_object() {
                return Err(ViewerError::FormatError(format!(
                    "{} #{}: expected an object, found {}",
                    what,
                    i + 1,
                    describe(&item)
                )));
            }
            serde_json::from_value(item).map_err(|e| ViewerError::format(format!("{} #{}", what, i + 1), e))
        })
        .collect()
}

fn require_name(what: &str, name: String) -> ViewerResult<String> {
    if name.trim().is_empty() {
        return Err(ViewerError::FormatError(format!("{} has an empty name", what)));
    }
    Ok(name)
}

fn field(raw: RawField) -> ViewerResult<Field> {
    let name = require_name("field", raw.name)?;
    let ty = TypeNode::from_value(&raw.ty)
        .map_err(|e| ViewerError::FormatError(format!("field `{}`: {}", name, inner_message(e))))?;
    Ok(Field {
        name,
        ty,
        docs: docs(raw.docs),
    })
}

fn fields(raw: Vec<RawField>) -> ViewerResult<Vec<Field>> {
    raw.into_iter().map(field).collect()
}

fn account(raw: RawAccount) -> ViewerResult<Account> {
    let name = require_name("account", raw.name)?;
    let fields = field_entries(&account_fields(raw.data, raw.ty))
        .map_err(|e| ViewerError::FormatError(format!("account `{}`: {}", name, inner_message(e))))?;
    Ok(Account {
        name,
        docs: docs(raw.docs),
        discriminator: raw.discriminator,
        fields,
    })
}

fn instruction(raw: RawInstruction) -> ViewerResult<Instruction> {
    let name = require_name("instruction", raw.name)?;

    let mut accounts = Vec::new();
    for item in raw.accounts.unwrap_or_default() {
        flatten_account(item, &mut accounts)?;
    }

    let args = fields(instruction_args(raw.args, raw.arguments))
        .map_err(|e| ViewerError::FormatError(format!("instruction `{}`: {}", name, inner_message(e))))?;

    Ok(Instruction {
        name,
        docs: docs(raw.docs),
        discriminator: raw.discriminator,
        accounts,
        args,
    })
}

/// Nested account groups are inlined in document order
fn flatten_account(raw: RawInstructionAccount, out: &mut Vec<InstructionAccount>) -> ViewerResult<()> {
    if let Some(children) = raw.accounts {
        debug!("flattening instruction account group `{}`", raw.name);
        for child in children {
            flatten_account(child, out)?;
        }
        return Ok(());
    }

    out.push(InstructionAccount {
        name: require_name("instruction account", raw.name)?,
        is_writable: flag(&[raw.is_writable, raw.writable, raw.is_mut]),
        is_signer: flag(&[raw.is_signer, raw.signer]),
        is_optional: flag(&[raw.is_optional, raw.optional]),
        docs: docs(raw.docs),
    });
    Ok(())
}

fn type_def(raw: RawTypeDef) -> ViewerResult<TypeDef> {
    let name = require_name("type", raw.name)?;
    let ty = TypeNode::from_value(&raw.ty)
        .map_err(|e| ViewerError::FormatError(format!("type `{}`: {}", name, inner_message(e))))?;
    Ok(TypeDef {
        name,
        docs: docs(raw.docs),
        ty,
    })
}

fn error_type(raw: RawError) -> ViewerResult<ErrorType> {
    Ok(ErrorType {
        name: require_name("error", raw.name)?,
        code: raw.code,
        message: error_message(raw.message, raw.msg),
        docs: docs(raw.docs),
    })
}

fn event(raw: RawEvent) -> ViewerResult<Event> {
    let name = require_name("event", raw.name)?;
    let fields = field_entries(&event_fields(raw.ty, raw.fields))
        .map_err(|e| ViewerError::FormatError(format!("event `{}`: {}", name, inner_message(e))))?;
    Ok(Event {
        name,
        docs: docs(raw.docs),
        discriminator: raw.discriminator,
        fields,
    })
}

// ============================================================================
// Type nodes
// ============================================================================

impl TypeNode {
    /// Decode a type node from any supported encoding.
    ///
    /// Unrecognized shapes become [`TypeNode::Unknown`]; the only failure is a
    /// malformed struct field nested inside the node.
    pub fn from_value(value: &Value) -> ViewerResult<TypeNode> {
        match value {
            Value::Null => Ok(TypeNode::empty()),
            Value::String(name) => Ok(TypeNode::Primitive(name.clone())),
            Value::Object(node) => match node.get("kind") {
                Some(Value::String(kind)) => decode_tagged(kind, node),
                Some(other) => Ok(TypeNode::Unknown(other.to_string())),
                None => decode_anchor(node),
            },
            other => Ok(TypeNode::Primitive(other.to_string())),
        }
    }
}

fn child(node: &Map<String, Value>, key: &str) -> ViewerResult<Box<TypeNode>> {
    let inner = match node.get(key) {
        Some(value) => TypeNode::from_value(value)?,
        None => TypeNode::empty(),
    };
    Ok(Box::new(inner))
}

fn string_at(node: &Map<String, Value>, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Nodes carrying a `kind` tag (Codama and Anchor `kind: struct|enum|array`)
fn decode_tagged(kind: &str, node: &Map<String, Value>) -> ViewerResult<TypeNode> {
    let decoded = match kind {
        "publicKeyTypeNode" | "pubkey" => TypeNode::PublicKey,
        "numberTypeNode" => TypeNode::Number {
            format: string_at(node, "format").unwrap_or_default(),
            endian: string_at(node, "endian"),
        },
        "stringTypeNode" => TypeNode::String {
            encoding: string_at(node, "encoding").unwrap_or_default(),
        },
        "definedTypeLinkNode" => TypeNode::DefinedTypeLink {
            name: string_at(node, "name").unwrap_or_default(),
        },
        "sizePrefixTypeNode" => TypeNode::SizePrefixed(child(node, "type")?),
        "array" => TypeNode::Array {
            element: child(node, "0")?,
            length: ArrayLength::from_value(node.get("1")),
        },
        "struct" | "structTypeNode" => TypeNode::Struct {
            fields: struct_fields(node.get("fields"))?,
        },
        "enum" | "enumTypeNode" => TypeNode::Enum {
            variants: enum_variants(node.get("variants"))?,
        },
        "optionTypeNode" => TypeNode::Option(child(node, "item")?),
        other => TypeNode::Unknown(other.to_string()),
    };
    Ok(decoded)
}

/// Kind-less Anchor encodings: `{"vec": T}`, `{"array": [T, N]}`, ...
fn decode_anchor(node: &Map<String, Value>) -> ViewerResult<TypeNode> {
    if node.contains_key("vec") {
        return Ok(TypeNode::Vec(child(node, "vec")?));
    }
    if node.contains_key("option") {
        return Ok(TypeNode::Option(child(node, "option")?));
    }
    if node.contains_key("coption") {
        return Ok(TypeNode::Option(child(node, "coption")?));
    }
    if let Some(array) = node.get("array") {
        return match array.as_array().map(Vec::as_slice) {
            Some([element, length]) => Ok(TypeNode::Array {
                element: Box::new(TypeNode::from_value(element)?),
                length: ArrayLength::from_value(Some(length)),
            }),
            _ => Ok(TypeNode::Unknown("array".to_string())),
        };
    }
    if let Some(defined) = node.get("defined") {
        let name = match defined {
            Value::String(name) => name.clone(),
            Value::Object(link) => string_at(link, "name").unwrap_or_default(),
            _ => String::new(),
        };
        return Ok(TypeNode::DefinedTypeLink { name });
    }

    // `{"hashMap": ...}` and friends: the wrapper key is the best label we have
    Ok(TypeNode::Unknown(
        node.keys().next().cloned().unwrap_or_default(),
    ))
}

fn struct_fields(raw: Option<&Value>) -> ViewerResult<Vec<Field>> {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(Vec::new());
    };
    let Some(entries) = raw.as_array() else {
        return Err(ViewerError::FormatError(format!(
            "struct fields: expected an array, found {}",
            describe(raw)
        )));
    };

    field_entries(entries)
}

fn field_entries(entries: &[Value]) -> ViewerResult<Vec<Field>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| struct_field(i, entry))
        .collect()
}

/// Named field object, or a bare type for tuple structs (named by position)
fn struct_field(index: usize, entry: &Value) -> ViewerResult<Field> {
    let named = entry.as_object().is_some_and(|obj| obj.contains_key("name"));
    if !named {
        return Ok(Field {
            name: index.to_string(),
            ty: TypeNode::from_value(entry)?,
            docs: None,
        });
    }

    let raw: RawField = serde_json::from_value(entry.clone())
        .map_err(|e| ViewerError::format(format!("struct field #{}", index + 1), e))?;
    field(raw)
}

fn enum_variants(raw: Option<&Value>) -> ViewerResult<Vec<String>> {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(Vec::new());
    };
    let raw: Vec<RawVariant> = serde_json::from_value(raw.clone())
        .map_err(|e| ViewerError::format("enum variants", e))?;
    Ok(raw.into_iter().map(RawVariant::into_name).collect())
}

// ============================================================================
// Helpers
// ============================================================================

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strip the `Malformed IDL document:` prefix when nesting context
fn inner_message(err: ViewerError) -> String {
    match err {
        ViewerError::FormatError(msg) => msg,
        other => other.to_string(),
    }
}
