use constcat::concat;

mod components;
mod home;
mod variables;

use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
use variables::CSS_VARIABLES;

// site-wide style bundling
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
  animation: page-in 0.5s ease;
}

@keyframes page-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Navigation */
.app-header {
  background-color: transparent;
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  transition: background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.app-header.scrolled {
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  max-width: var(--container-width);
  margin: 0 auto;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
}

.logo a {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-inverse);
}

.app-header.scrolled .logo a {
  color: var(--text-primary);
}

.logo-mark {
  color: var(--primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.nav-link {
  color: rgba(255, 255, 255, 0.85);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.app-header.scrolled .nav-link {
  color: var(--text-secondary);
}

.nav-link:hover {
  color: var(--primary);
  text-decoration: none;
}

.nav-link.active,
.app-header.scrolled .nav-link.active {
  color: var(--primary);
  background-color: rgba(0, 212, 255, 0.1);
}
"#
);
