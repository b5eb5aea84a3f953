use crate::SHELL_NAME;
use log::debug;
use std::env;
use std::path::Path;

/// Builds the prompt from the working directory as the OS reports it now.
pub fn render() -> String {
    match env::current_dir() {
        Ok(dir) => format_prompt(Some(&dir)),
        Err(e) => {
            debug!("cannot read working directory: {}", e);
            format_prompt(None)
        }
    }
}

pub fn format_prompt(dir: Option<&Path>) -> String {
    match dir {
        Some(dir) => format!("{}> {}> ", SHELL_NAME, dir.display()),
        None => format!("{}> ", SHELL_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CwdGuard;
    use serial_test::serial;

    #[test]
    fn test_format_with_directory() {
        assert_eq!(
            format_prompt(Some(Path::new("/home/user"))),
            "myshell> /home/user> "
        );
    }

    #[test]
    fn test_format_without_directory() {
        assert_eq!(format_prompt(None), "myshell> ");
    }

    #[test]
    #[serial]
    fn test_render_tracks_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = CwdGuard::new();
        let target = dir.path().canonicalize().unwrap();

        env::set_current_dir(&target).unwrap();
        assert_eq!(render(), format!("myshell> {}> ", target.display()));

        env::set_current_dir(cwd.original()).unwrap();
        assert_eq!(render(), format!("myshell> {}> ", cwd.original().display()));
    }
}
