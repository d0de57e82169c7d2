pub const CSS_VARIABLES: &str = r#"
:root,
[data-theme="light"] {
  /* Color System */
  --primary: #00D4FF;          /* Spark cyan */
  --primary-light: #5CE5FF;    /* Lighter cyan for hover states */
  --primary-dark: #0A2540;     /* Deep navy for headings and hero */
  --secondary: #10B981;        /* Secondary green for success/confirmation */
  --accent: #635BFF;           /* Violet accent for highlights */

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #64748B;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #0A2540;

  /* Semantic Colors */
  --success: #10B981;
  --warning: #F59E0B;
  --error: #EF4444;
  --info: #00D4FF;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --bg: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-raised: #FFFFFF;

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --text-disabled: var(--neutral-400);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);
  --border-focus: var(--primary);

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.2);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 400ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}

/* only the palette changes in dark mode; spacing and motion stay put */
[data-theme="dark"] {
  --primary-dark: #E2E8F0;
  --neutral-50: #111827;
  --neutral-100: #1F2937;
  --neutral-200: #334155;
  --neutral-300: #475569;
  --neutral-900: #F1F5F9;

  --background: #0B1120;
  --bg: #111827;
  --surface: #111827;
  --surface-raised: #1E293B;

  --text-primary: #F1F5F9;
  --text-secondary: #CBD5E1;
  --text-tertiary: #94A3B8;
  --text-disabled: #64748B;

  --border: #334155;
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.5);
}"#;
