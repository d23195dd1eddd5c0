//! Structural equality and hashing from named field projections.
//!
//! A value type declares, once, which of its fields take part in equality:
//!
//! ```
//! use calldiff_core::hash_eq::{Field, HashCodeAndEquals};
//!
//! struct Locus {
//!     contig: String,
//!     position: u32,
//! }
//!
//! static LOCUS_FIELDS: HashCodeAndEquals<Locus> = HashCodeAndEquals::new(&[
//!     Field::<Locus>::new("contig", |locus| &locus.contig),
//!     Field::<Locus>::new("position", |locus| &locus.position),
//! ]);
//!
//! impl PartialEq for Locus {
//!     fn eq(&self, other: &Self) -> bool {
//!         LOCUS_FIELDS.equals(self, other)
//!     }
//! }
//!
//! impl Eq for Locus {}
//!
//! impl std::hash::Hash for Locus {
//!     fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
//!         LOCUS_FIELDS.hash(self, state)
//!     }
//! }
//! ```
//!
//! `PartialEq`, `Eq` and `Hash` then agree by construction, because both walk
//! the same field list.
use std::any::Any;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use fxhash::FxHasher;

/// Initial value and multiplier of [`HashCodeAndEquals::hash_code`].
const HASH_SEED: u64 = 1;
const HASH_MULTIPLIER: u64 = 31;

///
/// A projected field value that can be compared and hashed without knowing
/// its concrete type.
///
/// Implemented for every `Eq + Hash + Debug` type, so projections simply
/// return a reference to the field.
///
pub trait FieldValue: Any + Debug {
    /// Value equality against another projection of the same field.
    fn dyn_eq(&self, other: &dyn FieldValue) -> bool;

    /// Feed this value into `state`.
    fn dyn_hash(&self, state: &mut dyn Hasher);

    fn as_any(&self) -> &dyn Any;
}

impl<V: Any + Eq + Hash + Debug> FieldValue for V {
    fn dyn_eq(&self, other: &dyn FieldValue) -> bool {
        other
            .as_any()
            .downcast_ref::<V>()
            .is_some_and(|other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One named projection from `T` to a field taking part in equality.
pub struct Field<T> {
    name: &'static str,
    project: fn(&T) -> &dyn FieldValue,
}

impl<T> Field<T> {
    pub const fn new(name: &'static str, project: fn(&T) -> &dyn FieldValue) -> Self {
        Field { name, project }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get<'a>(&self, obj: &'a T) -> &'a dyn FieldValue {
        (self.project)(obj)
    }
}

impl<T> Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Field").field(&self.name).finish()
    }
}

///
/// Equality and hashing for `T`, defined by an ordered list of fields.
///
/// Meant to be created once per type as a `static` and shared by every
/// instance; the type's `PartialEq` and `Hash` impls delegate to it.
///
pub struct HashCodeAndEquals<T: 'static> {
    fields: &'static [Field<T>],
}

impl<T: 'static> HashCodeAndEquals<T> {
    pub const fn new(fields: &'static [Field<T>]) -> Self {
        HashCodeAndEquals { fields }
    }

    ///
    /// Order-sensitive hash of all fields: each step multiplies the running
    /// value by 31 and adds the next field's hash.
    ///
    /// Stable across runs, unlike the randomly seeded std hasher.
    ///
    pub fn hash_code(&self, obj: &T) -> u64 {
        self.fields.iter().fold(HASH_SEED, |acc, field| {
            let mut hasher = FxHasher::default();
            field.get(obj).dyn_hash(&mut hasher);
            acc.wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(hasher.finish())
        })
    }

    /// Feed every field, in order, into `state`. Backs `impl Hash for T`.
    pub fn hash<H: Hasher>(&self, obj: &T, state: &mut H) {
        for field in self.fields {
            field.get(obj).dyn_hash(&mut *state);
        }
    }

    ///
    /// True if `lhs` and `rhs` are the same instance, or if every field
    /// compares equal.
    ///
    /// Both sides are `T`, so values of a different concrete type can never
    /// be passed in, let alone compare equal.
    ///
    pub fn equals(&self, lhs: &T, rhs: &T) -> bool {
        std::ptr::eq(lhs, rhs)
            || self
                .fields
                .iter()
                .all(|field| field.get(lhs).dyn_eq(field.get(rhs)))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(Field::name)
    }

    /// Every field rendered with `Debug`, for test failure messages.
    pub fn debug_fields(&self, obj: &T) -> Vec<(&'static str, String)> {
        self.fields
            .iter()
            .map(|field| (field.name, format!("{:?}", field.get(obj))))
            .collect()
    }
}

impl<T: 'static> Debug for HashCodeAndEquals<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.field_names()).finish()
    }
}
