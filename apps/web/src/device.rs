use portfolio_core::DeviceProfile;

/// Picks the animation profile from a browser user agent string.
pub fn profile_for_user_agent(user_agent: &str) -> DeviceProfile {
    let lower = user_agent.to_lowercase();
    let mobile = lower.contains("windows phone")
        || lower.contains("android")
        || ["iPad", "iPhone", "iPod"]
            .iter()
            .any(|device| user_agent.contains(device));

    if mobile {
        DeviceProfile::Mobile
    } else if user_agent.contains("Firefox") {
        DeviceProfile::Firefox
    } else {
        DeviceProfile::Desktop
    }
}

pub fn detect() -> DeviceProfile {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .map_or(DeviceProfile::Desktop, |agent| profile_for_user_agent(&agent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phones_and_tablets_are_mobile() {
        for agent in [
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/126.0 Mobile",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15",
            "Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1) Edge/15.15063",
            "Mozilla/5.0 (Android 14; Mobile; rv:127.0) Gecko/127.0 Firefox/127.0",
        ] {
            assert_eq!(profile_for_user_agent(agent), DeviceProfile::Mobile, "{agent}");
        }
    }

    #[test]
    fn desktop_firefox_gets_its_own_tick() {
        let agent = "Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0";
        assert_eq!(profile_for_user_agent(agent), DeviceProfile::Firefox);
    }

    #[test]
    fn everything_else_is_desktop() {
        let agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/537.36 Chrome/126.0";
        assert_eq!(profile_for_user_agent(agent), DeviceProfile::Desktop);
    }
}
