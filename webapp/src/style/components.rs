pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
  text-decoration: none;
}

.btn:hover {
  text-decoration: none;
}

.btn:focus-visible {
  box-shadow: 0 0 0 3px rgba(0, 212, 255, 0.35);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: #0A2540;
}

.btn-primary:hover {
  background-color: var(--primary-light);
}

.btn-secondary {
  background-color: transparent;
  color: inherit;
  border: 2px solid currentColor;
}

.btn-secondary:hover {
  background-color: rgba(255, 255, 255, 0.1);
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

/* Theme toggle: the icon for the *other* theme is shown */
.theme-toggle {
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface-raised);
  color: var(--text-primary);
  cursor: pointer;
  font-size: 1.1rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.theme-toggle:hover {
  transform: rotate(20deg);
}

.theme-icon-light {
  display: none;
}

[data-theme="dark"] .theme-icon-light {
  display: inline;
}

[data-theme="dark"] .theme-icon-dark {
  display: none;
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-4);
  transition: transform var(--transition-fast) var(--easing-standard);
}

.form-group:focus-within {
  transform: scale(1.02);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px rgba(0, 212, 255, 0.2);
  outline: none;
}

.form-textarea {
  min-height: 140px;
  resize: vertical;
}

.submit-btn {
  width: 100%;
  min-height: 48px;
  position: relative;
}

.submit-btn:disabled {
  cursor: progress;
}

.submit-btn.loading::after {
  content: "";
  width: 20px;
  height: 20px;
  border: 3px solid rgba(10, 37, 64, 0.25);
  border-top-color: #0A2540;
  border-radius: var(--radius-full);
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* Notifications */
.notification {
  position: fixed;
  top: 100px;
  right: 20px;
  padding: 1rem 1.5rem;
  border-radius: var(--radius-md);
  color: white;
  font-weight: 600;
  font-size: 0.95rem;
  box-shadow: var(--shadow-lg);
  z-index: 10000;
  opacity: 0;
  transform: translateX(400px);
  transition: all var(--transition-slow) var(--easing-standard);
}

.notification.success {
  background: var(--success);
}

.notification.error {
  background: var(--error);
}

.notification.visible {
  opacity: 1;
  transform: translateX(0);
}

/* Layout utilities */
.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}
"#;
