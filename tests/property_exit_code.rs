//! Exit code contract
//!
//! For any `ExecveTestError` variant, `exit_status()` is non-zero. Exec
//! failures follow the shell convention (127 not found, 126 not executable,
//! 1 otherwise); setup failures exit 2.

use execve_test::error::ExecveTestError;
use nix::errno::Errno;
use proptest::prelude::*;

const OTHER_ERRNOS: &[Errno] = &[
    Errno::E2BIG,
    Errno::ENOEXEC,
    Errno::ENOMEM,
    Errno::ETXTBSY,
    Errno::ELOOP,
    Errno::ENAMETOOLONG,
    Errno::EIO,
    Errno::EISDIR,
];

/// Strategy that produces an arbitrary non-I/O `ExecveTestError` variant.
fn arb_error() -> impl Strategy<Value = ExecveTestError> {
    let arb_string = "[a-zA-Z0-9_ /\\-\\.]{0,64}";
    (0..=5u8, arb_string, 0..OTHER_ERRNOS.len()).prop_map(|(tag, s, errno_idx)| match tag {
        0 => ExecveTestError::ProgramNotFound {
            program: s,
            errno: Errno::ENOENT,
        },
        1 => ExecveTestError::PermissionDenied {
            program: s,
            errno: Errno::EACCES,
        },
        2 => ExecveTestError::ExecFailed {
            program: s,
            errno: OTHER_ERRNOS[errno_idx],
        },
        3 => ExecveTestError::InvalidArgument {
            arg: s,
            reason: "contains a NUL byte".to_string(),
        },
        4 => ExecveTestError::ConfigParse(s),
        _ => ExecveTestError::UnknownSubcommand { name: s },
    })
}

fn expected_status(err: &ExecveTestError) -> u8 {
    match err {
        ExecveTestError::ProgramNotFound { .. } => 127,
        ExecveTestError::PermissionDenied { .. } => 126,
        ExecveTestError::ExecFailed { .. } => 1,
        _ => 2,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn every_error_is_nonzero(err in arb_error()) {
        prop_assert_ne!(err.exit_status(), 0);
        prop_assert_eq!(err.exit_status(), expected_status(&err));
    }

    #[test]
    fn errno_classification_names_the_program(
        program in "[a-z][a-z0-9_-]{0,20}",
        errno_idx in 0..OTHER_ERRNOS.len(),
    ) {
        for errno in [Errno::ENOENT, Errno::ENOTDIR] {
            let not_found = ExecveTestError::from_errno(&program, errno);
            let message = not_found.to_string();
            let symbol = format!("{errno:?}");
            prop_assert_eq!(not_found.exit_status(), 127);
            prop_assert!(message.contains(&program), "message {:?} lacks program", message);
            prop_assert!(message.contains(&symbol), "message {:?} lacks {}", message, symbol);
        }

        for errno in [Errno::EACCES, Errno::EPERM] {
            let denied = ExecveTestError::from_errno(&program, errno);
            let message = denied.to_string();
            let symbol = format!("{errno:?}");
            prop_assert_eq!(denied.exit_status(), 126);
            prop_assert!(message.contains(&symbol), "message {:?} lacks {}", message, symbol);
        }

        let errno = OTHER_ERRNOS[errno_idx];
        let other = ExecveTestError::from_errno(&program, errno);
        let message = other.to_string();
        let symbol = format!("{errno:?}");
        prop_assert_eq!(other.exit_status(), 1);
        prop_assert!(message.contains(&symbol), "message {:?} lacks {}", message, symbol);
    }
}

#[test]
fn io_error_exits_2() {
    let err = ExecveTestError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
    assert_eq!(err.exit_status(), 2);
}

#[test]
fn json_error_exits_2() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ExecveTestError::Json(json_err);
    assert_eq!(err.exit_status(), 2);
}
