// Fire-and-forget external processes.
// - Every spawned child is waited on by a reaper thread, so none is left as a zombie.
// - Picks the platform opener for URLs (open, cmd start, xdg-open).
use std::{
    io,
    process::{Command, Stdio},
    thread,
};

/// Spawns `command` with stdio detached and returns its pid. The child is
/// reaped in the background once it exits.
pub fn spawn_reaped(mut command: Command) -> io::Result<u32> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();

    thread::Builder::new()
        .name(format!("reap-{pid}"))
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => log::debug!("child {pid} exited with {status}"),
            Ok(_) => {}
            Err(err) => log::warn!("failed to wait for child {pid}: {err}"),
        })?;
    Ok(pid)
}

pub fn browser_command(url: &str) -> Option<Command> {
    let (program, leading_args): (&str, &[&str]) = if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        // The empty argument is the window title `start` expects first.
        ("cmd", &["/C", "start", ""])
    } else if cfg!(unix) {
        ("xdg-open", &[])
    } else {
        return None;
    };

    let mut command = Command::new(program);
    command.args(leading_args).arg(url);
    Some(command)
}

pub fn open_in_browser(url: &str) -> io::Result<()> {
    let command = browser_command(url).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::Unsupported,
            "no browser opener known for this platform",
        )
    })?;
    spawn_reaped(command)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::{
        fs,
        time::{Duration, Instant},
    };

    /// Child processes of this test binary currently in zombie state.
    pub fn zombie_children() -> Vec<u32> {
        let me = std::process::id();
        let Ok(entries) = fs::read_dir("/proc") else {
            return Vec::new();
        };
        entries
            .flatten()
            .filter_map(|entry| fs::read_to_string(entry.path().join("stat")).ok())
            .filter_map(|stat| {
                // `pid (comm) state ppid ...`; comm may contain spaces.
                let (head, rest) = stat.rsplit_once(')')?;
                let pid = head.split_whitespace().next()?.parse::<u32>().ok()?;
                let mut fields = rest.split_whitespace();
                let state = fields.next()?;
                let ppid = fields.next()?.parse::<u32>().ok()?;
                (state == "Z" && ppid == me).then_some(pid)
            })
            .collect()
    }

    /// Waits until none of `pids` is a zombie child, or the deadline passes.
    pub fn wait_until_reaped(pids: &[u32]) -> Vec<u32> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let lingering = zombie_children()
                .into_iter()
                .filter(|pid| pids.is_empty() || pids.contains(pid))
                .collect::<Vec<_>>();
            if lingering.is_empty() || Instant::now() >= deadline {
                return lingering;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::wait_until_reaped;
    use super::*;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = spawn_reaped(Command::new("trusthub-test-no-such-binary")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn browser_command_uses_xdg_open() {
        let command = browser_command("https://example.com/form").expect("opener");
        assert_eq!(command.get_program(), "xdg-open");
        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            vec!["https://example.com/form"]
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn exited_children_do_not_linger_as_zombies() {
        let pids = (0..5)
            .map(|_| spawn_reaped(Command::new("true")).expect("spawn true"))
            .collect::<Vec<_>>();

        assert_eq!(wait_until_reaped(&pids), Vec::<u32>::new());
    }
}
