/*
 * Resource identifiers. The loader APIs (LoadIconW, LoadCursorW, LoadMenuW,
 * DialogBoxParamW, ...) take either a pointer to a name or a 16-bit integer
 * smuggled through the pointer (MAKEINTRESOURCE). Callers here describe a
 * resource by text, and an all-digit text is taken to mean the numeric id.
 */

use crate::marshal::WideString;
use std::ptr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceName {
    /// No name; passed as a null pointer.
    Null,
    /// A numeric id passed as MAKEINTRESOURCE(id).
    Id(u16),
    /// A resource referenced by its string name.
    Named(WideString),
}

impl ResourceName {
    /*
     * Resolves a textual resource reference:
     *   - "" is `Null`,
     *   - all ASCII digits and fits in 16 bits is `Id`,
     *   - anything else (including digit strings too large for an id) is
     *     `Named`, which is how the resource compiler treats them too.
     */
    pub fn parse(name: &str) -> Self {
        if name.is_empty() {
            return ResourceName::Null;
        }
        if name.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = name.parse::<u16>() {
                return ResourceName::Id(id);
            }
            log::trace!("ResourceName: '{name}' is numeric but out of id range, using as name");
        }
        ResourceName::Named(WideString::new(name))
    }

    /// The pointer form expected by the native loader functions.
    pub fn as_ptr(&self) -> *const u16 {
        match self {
            ResourceName::Null => ptr::null(),
            ResourceName::Id(id) => *id as usize as *const u16,
            ResourceName::Named(name) => name.as_ptr(),
        }
    }

    pub fn id(&self) -> Option<u16> {
        match self {
            ResourceName::Id(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<u16> for ResourceName {
    fn from(id: u16) -> Self {
        ResourceName::Id(id)
    }
}

impl From<&str> for ResourceName {
    fn from(name: &str) -> Self {
        ResourceName::parse(name)
    }
}

impl From<&String> for ResourceName {
    fn from(name: &String) -> Self {
        ResourceName::parse(name)
    }
}

/// Formats a numeric resource id as the text `ResourceName::parse` accepts.
pub fn resource_id_to_name(id: i32) -> String {
    id.to_string()
}

/// Whether a name pointer actually carries a MAKEINTRESOURCE id (IS_INTRESOURCE).
pub fn is_int_resource(ptr: *const u16) -> bool {
    (ptr as usize) >> 16 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_resolve_to_numeric_id() {
        let name = ResourceName::parse("32512");
        assert_eq!(name, ResourceName::Id(32512));
        assert_eq!(name.as_ptr() as usize, 32512);
        assert!(is_int_resource(name.as_ptr()));
    }

    #[test]
    fn test_text_resolves_to_named_resource() {
        let name = ResourceName::parse("ABOUTBOX");
        match &name {
            ResourceName::Named(wide) => assert_eq!(wide, &WideString::new("ABOUTBOX")),
            other => panic!("expected a named resource, got {other:?}"),
        }
        assert_eq!(name.id(), None);
    }

    #[test]
    fn test_mixed_text_is_a_name() {
        assert!(matches!(ResourceName::parse("12a"), ResourceName::Named(_)));
        assert!(matches!(ResourceName::parse("-1"), ResourceName::Named(_)));
        assert!(matches!(ResourceName::parse(" 1"), ResourceName::Named(_)));
    }

    #[test]
    fn test_empty_name_is_null() {
        let name = ResourceName::parse("");
        assert_eq!(name, ResourceName::Null);
        assert!(name.as_ptr().is_null());
    }

    #[test]
    fn test_out_of_range_number_is_a_name() {
        assert!(matches!(ResourceName::parse("65536"), ResourceName::Named(_)));
        assert_eq!(ResourceName::parse("65535"), ResourceName::Id(65535));
        assert_eq!(ResourceName::parse("007"), ResourceName::Id(7));
    }

    #[test]
    fn test_id_to_name_round_trips_through_parse() {
        let text = resource_id_to_name(101);
        assert_eq!(text, "101");
        assert_eq!(ResourceName::from(text.as_str()).id(), Some(101));
    }
}
