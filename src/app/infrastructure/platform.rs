/// Best-effort system dark-mode detection. Falls back to light mode when
/// nothing can be determined.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    {
        use winreg::enums::HKEY_CURRENT_USER;
        use winreg::RegKey;

        if let Ok(personalize) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = personalize.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        // Freedesktop color-scheme preference first, GTK theme name second
        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            if String::from_utf8_lossy(&output.stdout).contains("prefer-dark") {
                return true;
            }
        }

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            if String::from_utf8_lossy(&output.stdout)
                .to_lowercase()
                .contains("dark")
            {
                return true;
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        // The key only exists when dark mode is active
        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .to_lowercase()
                    .contains("dark")
            {
                return true;
            }
        }
    }

    false
}
