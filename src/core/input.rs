/// Maps a key identifier to its lane: the identifier's position in the
/// binding list. Matching is ASCII case-insensitive, so a host forwarding
/// `D` from a shift-modified event still lands in lane 0.
#[inline(always)]
pub fn lane_for_key(key: char, bindings: &[char]) -> Option<usize> {
    bindings.iter().position(|b| b.eq_ignore_ascii_case(&key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KEY_BINDINGS;

    #[test]
    fn default_bindings_map_in_order() {
        assert_eq!(lane_for_key('d', &KEY_BINDINGS), Some(0));
        assert_eq!(lane_for_key('f', &KEY_BINDINGS), Some(1));
        assert_eq!(lane_for_key('j', &KEY_BINDINGS), Some(2));
        assert_eq!(lane_for_key('k', &KEY_BINDINGS), Some(3));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(lane_for_key('D', &KEY_BINDINGS), Some(0));
        assert_eq!(lane_for_key('K', &KEY_BINDINGS), Some(3));
    }

    #[test]
    fn unbound_keys_map_to_none() {
        assert_eq!(lane_for_key('a', &KEY_BINDINGS), None);
        assert_eq!(lane_for_key(' ', &KEY_BINDINGS), None);
        assert_eq!(lane_for_key('4', &KEY_BINDINGS), None);
    }

    #[test]
    fn custom_bindings_override_defaults() {
        let bindings = ['z', 'x', 'n', 'm'];
        assert_eq!(lane_for_key('n', &bindings), Some(2));
        assert_eq!(lane_for_key('d', &bindings), None);
    }
}
