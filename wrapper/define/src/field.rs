//! Field descriptors for request and response types.
//!
//! A [`Field`] describes one struct member of a declared type: its name, its
//! type, the serialization [`Tag`]s attached to it, and (for request types)
//! the nested fields the type itself declares.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A serialization tag attached to a field.
///
/// Mirrors a Go struct tag entry such as `json:"name,omitempty"`, where
/// `json` is the key and `name,omitempty` is the value.
///
/// ## Examples
///
/// ```
/// use wrapper_define::Tag;
///
/// let tag = Tag::new("json", "name,omitempty");
/// assert_eq!(tag.to_string(), r#"json:"name,omitempty""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Tag key (e.g., `json`, `url`).
    pub key: String,
    /// Raw tag value.
    pub value: String,
}

impl Tag {
    /// Creates a tag from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\"{}\"", self.key, self.value)
    }
}

/// A described struct member.
///
/// The same type is used for the request (the `from` side of a
/// [`Function`](crate::Function)), for each response, and for the request's
/// nested fields.
///
/// ## Tags
///
/// An empty `tags` list marks the field as an endpoint (path) component. A
/// non-empty list marks it as body content.
///
/// ## Examples
///
/// ```
/// use wrapper_define::{Field, Tag};
///
/// let request = Field::new("r", "GetChannel")
///     .pointer()
///     .with_field(Field::new("ChannelID", "Snowflake"))
///     .with_field(Field::new("Limit", "int").with_tag(Tag::new("json", "limit")));
///
/// assert_eq!(request.name_with_pointer(), "*GetChannel");
/// assert!(!request.fields[0].is_tagged());
/// assert!(request.fields[1].is_tagged());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field (or parameter) name, e.g. `ChannelID`.
    pub name: String,
    /// Bare type name without package or pointer decoration, e.g. `Channel`.
    pub type_name: String,
    /// Package qualifier for the type, if it lives outside the generated package.
    #[serde(default)]
    pub package: Option<String>,
    /// Whether the type is referenced through a pointer.
    #[serde(default)]
    pub pointer: bool,
    /// Serialization tags in declaration order.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Nested fields declared by this field's type, in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Field {
    /// Creates an untagged, non-pointer field with no nested fields.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    /// Marks the field's type as a pointer.
    pub fn pointer(mut self) -> Self {
        self.pointer = true;
        self
    }

    /// Sets the package qualifier.
    pub fn in_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Appends a serialization tag.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Appends a nested field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns `true` when the field carries at least one tag.
    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Returns the package-qualified type name without pointer decoration.
    ///
    /// ## Examples
    ///
    /// ```
    /// use wrapper_define::Field;
    ///
    /// assert_eq!(Field::new("c", "Channel").full_name(), "Channel");
    /// assert_eq!(
    ///     Field::new("c", "Channel").in_package("resources").full_name(),
    ///     "resources.Channel"
    /// );
    /// ```
    pub fn full_name(&self) -> String {
        match &self.package {
            Some(package) => format!("{}.{}", package, self.type_name),
            None => self.type_name.clone(),
        }
    }

    /// Returns the package-qualified type name, prefixed with `*` for pointers.
    ///
    /// ## Examples
    ///
    /// ```
    /// use wrapper_define::Field;
    ///
    /// let field = Field::new("c", "Channel").in_package("resources").pointer();
    /// assert_eq!(field.full_name_with_pointer(), "*resources.Channel");
    /// ```
    pub fn full_name_with_pointer(&self) -> String {
        if self.pointer {
            format!("*{}", self.full_name())
        } else {
            self.full_name()
        }
    }

    /// Returns the bare type name, prefixed with `*` for pointers.
    pub fn name_with_pointer(&self) -> String {
        if self.pointer {
            format!("*{}", self.type_name)
        } else {
            self.type_name.clone()
        }
    }
}
