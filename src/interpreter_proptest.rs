//! Property-based tests for interpreter version handling

#[cfg(test)]
mod tests {
    use crate::interpreter::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parses_any_three_part_version(major in 0u64..20, minor in 0u64..100, patch in 0u64..100) {
            let output = format!("Python {major}.{minor}.{patch}\n");
            let version = parse_python_version(&output);
            prop_assert_eq!(version.clone(), Some(format!("{major}.{minor}.{patch}")));

            let parsed = to_semver(&version.unwrap());
            prop_assert_eq!(parsed, Some(semver::Version::new(major, minor, patch)));
        }

        #[test]
        fn outdated_matches_semver_ordering(major in 2u64..5, minor in 0u64..15, patch in 0u64..20) {
            let version = format!("{major}.{minor}.{patch}");
            let expected = semver::Version::new(major, minor, patch) < semver::Version::new(3, 8, 0);
            prop_assert_eq!(is_outdated(&version).unwrap(), expected);
        }

        #[test]
        fn never_panics_on_arbitrary_output(output in ".*") {
            if let Some(version) = parse_python_version(&output) {
                prop_assert!(version.starts_with(|c: char| c.is_ascii_digit()));
            }
            let _ = to_semver(&output);
        }
    }
}
