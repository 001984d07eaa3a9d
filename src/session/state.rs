use std::time::{Duration, Instant};

pub const SERVER_STARTING: &str = "Starting Server...";
pub const SERVER_STOPPING: &str = "Stopping Server...";
pub const SERVER_DOWN: &str = "server is down...";

/// Format an elapsed duration as `HH:MM:SS`.
///
/// Hours are not wrapped at 24 and grow past two digits when needed; minutes
/// and seconds are always in `0..=59`.
pub fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Tracked lifetime of the managed game server
#[derive(Debug, Clone, Copy)]
pub struct ServerSession {
    pub running: bool,
    /// Only meaningful while `running` is true; left stale after a stop
    pub started_at: Instant,
}

/// Bot clock plus the single managed server session
#[derive(Debug, Clone)]
pub struct SessionState {
    bot_started_at: Instant,
    server: ServerSession,
}

impl SessionState {
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(now: Instant) -> Self {
        Self {
            bot_started_at: now,
            server: ServerSession {
                running: false,
                started_at: now,
            },
        }
    }

    pub fn server(&self) -> ServerSession {
        self.server
    }

    pub fn is_running(&self) -> bool {
        self.server.running
    }

    pub fn bot_uptime(&self) -> String {
        self.bot_uptime_at(Instant::now())
    }

    pub fn bot_uptime_at(&self, now: Instant) -> String {
        format_uptime(now.saturating_duration_since(self.bot_started_at))
    }

    pub fn start_server(&mut self) -> &'static str {
        self.start_server_at(Instant::now())
    }

    /// Mark the server as running from `now`. Starting twice just moves the
    /// baseline.
    pub fn start_server_at(&mut self, now: Instant) -> &'static str {
        self.server.started_at = now;
        self.server.running = true;
        tracing::info!("Server session marked as running");
        SERVER_STARTING
    }

    pub fn stop_server(&mut self) -> &'static str {
        self.server.running = false;
        tracing::info!("Server session marked as stopped");
        SERVER_STOPPING
    }

    /// Elapsed time of the current session, `None` while stopped
    pub fn server_elapsed_at(&self, now: Instant) -> Option<Duration> {
        self.server
            .running
            .then(|| now.saturating_duration_since(self.server.started_at))
    }

    pub fn server_uptime(&self) -> String {
        self.server_uptime_at(Instant::now())
    }

    pub fn server_uptime_at(&self, now: Instant) -> String {
        match self.server_elapsed_at(now) {
            Some(elapsed) => format_uptime(elapsed),
            None => SERVER_DOWN.to_string(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_uptime_shape(s: &str) -> bool {
        let parts: Vec<&str> = s.split(':').collect();
        parts.len() == 3
            && parts.iter().all(|p| p.len() >= 2 && p.chars().all(|c| c.is_ascii_digit()))
            && parts[1].len() == 2
            && parts[2].len() == 2
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::ZERO), "00:00:00");
        assert_eq!(format_uptime(Duration::from_millis(5_999)), "00:00:05");
        assert_eq!(format_uptime(Duration::from_secs(59)), "00:00:59");
        assert_eq!(format_uptime(Duration::from_secs(60)), "00:01:00");
        assert_eq!(format_uptime(Duration::from_secs(3_599)), "00:59:59");
        assert_eq!(format_uptime(Duration::from_secs(3_600)), "01:00:00");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "25:01:01");
        assert_eq!(format_uptime(Duration::from_secs(360_000)), "100:00:00");
    }

    #[test]
    fn test_format_uptime_fields_in_range() {
        for secs in (0..200_000u64).step_by(997) {
            let s = format_uptime(Duration::from_secs(secs));
            assert!(is_uptime_shape(&s), "bad shape: {}", s);

            let parts: Vec<u64> = s.split(':').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts[0], secs / 3600);
            assert!(parts[1] < 60);
            assert!(parts[2] < 60);
            assert_eq!(parts[0] * 3600 + parts[1] * 60 + parts[2], secs);
        }
    }

    #[test]
    fn test_bot_uptime() {
        let t0 = Instant::now();
        let state = SessionState::started_at(t0);
        assert_eq!(state.bot_uptime_at(t0), "00:00:00");
        assert_eq!(
            state.bot_uptime_at(t0 + Duration::from_secs(3_723)),
            "01:02:03"
        );
        assert!(is_uptime_shape(&state.bot_uptime()));
    }

    #[test]
    fn test_server_down_by_default() {
        let state = SessionState::new();
        assert!(!state.is_running());
        assert_eq!(state.server_uptime(), SERVER_DOWN);
    }

    #[test]
    fn test_start_then_uptime() {
        let mut state = SessionState::new();
        assert_eq!(state.start_server(), SERVER_STARTING);
        assert!(state.is_running());

        let uptime = state.server_uptime();
        assert!(uptime.starts_with("00:00:0"), "unexpected uptime {}", uptime);
    }

    #[test]
    fn test_stop_always_clears_running() {
        let mut state = SessionState::new();
        assert_eq!(state.stop_server(), SERVER_STOPPING);
        assert!(!state.is_running());

        state.start_server();
        state.stop_server();
        assert!(!state.is_running());
        assert_eq!(state.server_uptime(), SERVER_DOWN);
    }

    #[test]
    fn test_stop_keeps_stale_start_time() {
        let t0 = Instant::now();
        let mut state = SessionState::started_at(t0);
        state.start_server_at(t0 + Duration::from_secs(10));
        state.stop_server();

        assert_eq!(state.server().started_at, t0 + Duration::from_secs(10));
        assert_eq!(state.server_elapsed_at(t0 + Duration::from_secs(20)), None);
    }

    #[test]
    fn test_double_start_resets_baseline() {
        let t0 = Instant::now();
        let mut state = SessionState::started_at(t0);

        state.start_server_at(t0);
        state.start_server_at(t0 + Duration::from_secs(100));

        let now = t0 + Duration::from_secs(130);
        assert_eq!(state.server_uptime_at(now), "00:00:30");
        // bot clock is unaffected
        assert_eq!(state.bot_uptime_at(now), "00:02:10");
    }
}
