//! A small reference decoder used to produce realistic context trails.
//!
//! It walks a value against a descriptor the way structural decoders usually do:
//! depth-first, fields in declaration order, union branches keyed by index.

#![allow(dead_code)]

use autopsy::{
    ContextEntry, DecodeResult, Primitive, TypeDescriptor, TypeKind, ValidationError,
    ValidationErrors,
};
use serde_json::{Map, Value};
use stillwater::Validation;

/// Decodes `value` against `descriptor`.
pub fn decode(descriptor: &TypeDescriptor, value: &Value) -> DecodeResult {
    decode_input(descriptor, Some(value))
}

/// Decodes a possibly absent input against `descriptor`.
pub fn decode_input(descriptor: &TypeDescriptor, value: Option<&Value>) -> DecodeResult {
    let context = vec![ContextEntry::root(descriptor.clone())];
    match walk(descriptor, value, &context) {
        Ok(decoded) => Validation::Success(decoded),
        Err(errors) => Validation::Failure(
            ValidationErrors::from_vec(errors).expect("failed decode reports at least one error"),
        ),
    }
}

fn failure(context: &[ContextEntry], value: Option<&Value>) -> Result<Value, Vec<ValidationError>> {
    Err(vec![ValidationError::new(context.to_vec(), value.cloned())])
}

fn child(context: &[ContextEntry], key: String, descriptor: &TypeDescriptor) -> Vec<ContextEntry> {
    let mut next = context.to_vec();
    next.push(ContextEntry::new(key, descriptor.clone()));
    next
}

fn walk(
    descriptor: &TypeDescriptor,
    value: Option<&Value>,
    context: &[ContextEntry],
) -> Result<Value, Vec<ValidationError>> {
    match descriptor.kind() {
        TypeKind::Primitive(primitive) => {
            let accepted = match (primitive, value) {
                (Primitive::Unknown, _) => true,
                (Primitive::String, Some(Value::String(_))) => true,
                (Primitive::Number, Some(Value::Number(_))) => true,
                (Primitive::Boolean, Some(Value::Bool(_))) => true,
                (Primitive::Null, Some(Value::Null)) => true,
                _ => false,
            };
            if accepted {
                Ok(value.cloned().unwrap_or(Value::Null))
            } else {
                failure(context, value)
            }
        }
        TypeKind::Literal(expected) => match value {
            Some(found) if found == expected => Ok(found.clone()),
            _ => failure(context, value),
        },
        TypeKind::Array(item) => {
            let Some(Value::Array(items)) = value else {
                return failure(context, value);
            };
            let mut errors = Vec::new();
            let mut decoded = Vec::with_capacity(items.len());
            for (index, element) in items.iter().enumerate() {
                let next = child(context, index.to_string(), item);
                match walk(item, Some(element), &next) {
                    Ok(v) => decoded.push(v),
                    Err(e) => errors.extend(e),
                }
            }
            if errors.is_empty() {
                Ok(Value::Array(decoded))
            } else {
                Err(errors)
            }
        }
        TypeKind::Record(fields) => {
            let Some(Value::Object(object)) = value else {
                return failure(context, value);
            };
            let mut errors = Vec::new();
            let mut decoded = Map::new();
            for (key, field) in fields {
                let next = child(context, key.clone(), field);
                match walk(field, object.get(key), &next) {
                    Ok(v) => {
                        decoded.insert(key.clone(), v);
                    }
                    Err(e) => errors.extend(e),
                }
            }
            if errors.is_empty() {
                Ok(Value::Object(decoded))
            } else {
                Err(errors)
            }
        }
        TypeKind::Union(members) => {
            if members.is_empty() {
                return failure(context, value);
            }
            let mut errors = Vec::new();
            for (index, member) in members.iter().enumerate() {
                let next = child(context, index.to_string(), member);
                match walk(member, value, &next) {
                    Ok(v) => return Ok(v),
                    Err(e) => errors.extend(e),
                }
            }
            Err(errors)
        }
        TypeKind::Branded {
            base, predicate, ..
        } => {
            let decoded = walk(base, value, context)?;
            if predicate(&decoded) {
                Ok(decoded)
            } else {
                failure(context, value)
            }
        }
    }
}

/// The `Gender` union from the person examples.
pub fn gender() -> TypeDescriptor {
    TypeDescriptor::union(vec![
        TypeDescriptor::literal("Male"),
        TypeDescriptor::literal("Female"),
    ])
}

/// The `Person` record from the person examples.
pub fn person() -> TypeDescriptor {
    TypeDescriptor::record([
        ("name", TypeDescriptor::string()),
        ("age", TypeDescriptor::number()),
        ("gender", gender()),
        (
            "children",
            TypeDescriptor::array(TypeDescriptor::record([("gender", gender())])),
        ),
    ])
}

/// A number refined to be non-negative, reported as `Positive`.
pub fn positive() -> TypeDescriptor {
    TypeDescriptor::branded(TypeDescriptor::number(), "Positive", |value| {
        value.as_f64().is_some_and(|n| n >= 0.0)
    })
}
