pub const HOME_STYLES: &str = r#"
/* Page Styles */

/* General Layout */
.home-container,
.about {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
  }

  section {
    padding: var(--space-16) 0;
  }

  .section-title {
    font-size: 2rem;
    font-weight: 700;
    margin-bottom: var(--space-6);
    color: var(--text-primary);
  }

  .section-subtitle {
    color: var(--text-secondary);
    margin-bottom: var(--space-8);
  }

  /* Hero Section */
  .hero {
    background: linear-gradient(135deg, #0A2540, var(--accent));
    color: white;
    padding: calc(var(--header-height) + var(--space-16)) 0 var(--space-16);
    text-align: center;
  }

  .hero-compact {
    padding-bottom: var(--space-12);
  }

  .hero-content {
    max-width: 800px;
    margin: 0 auto;
  }

  .hero-title {
    font-size: 3.5rem;
    font-weight: 700;
    margin-bottom: var(--space-4);
    letter-spacing: -0.02em;
  }

  .hero-subtitle {
    font-size: 1.375rem;
    margin-bottom: var(--space-8);
    opacity: 0.9;
  }

  .hero-actions {
    display: flex;
    gap: var(--space-4);
    justify-content: center;
    margin-top: var(--space-8);
  }

  /* Services Section */
  .services {
    background-color: var(--bg);
  }

  .services-grid,
  .values-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: var(--space-6);
  }

  .service-card,
  .value-card {
    background-color: var(--surface-raised);
    padding: var(--space-8) var(--space-6);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-sm);
    transition: transform var(--transition-normal) var(--easing-standard),
                box-shadow var(--transition-normal) var(--easing-standard);
  }

  .service-card:hover,
  .value-card:hover {
    transform: translateY(-4px);
    box-shadow: var(--shadow-md);
  }

  .service-card h3,
  .value-card h3 {
    margin-bottom: var(--space-2);
    color: var(--text-primary);
  }

  .service-card p,
  .value-card p {
    color: var(--text-secondary);
  }

  .service-icon {
    width: 56px;
    height: 56px;
    margin-bottom: var(--space-4);
    border-radius: var(--radius-full);
    display: flex;
    align-items: center;
    justify-content: center;
    background-color: rgba(0, 212, 255, 0.12);
  }

  .web-icon::before {
    content: "🌐";
    font-size: 1.5rem;
  }

  .mobile-icon::before {
    content: "📱";
    font-size: 1.5rem;
  }

  .design-icon::before {
    content: "🎨";
    font-size: 1.5rem;
  }

  .values .btn {
    margin-top: var(--space-8);
  }

  /* Call to action */
  .cta-section {
    text-align: center;
    background-color: var(--background);
  }

  .cta-section h2 {
    font-size: 2rem;
    margin-bottom: var(--space-2);
  }

  .cta-section p {
    color: var(--text-secondary);
    margin-bottom: var(--space-6);
  }

  /* Contact */
  .contact {
    padding-top: calc(var(--header-height) + var(--space-12));
    background-color: var(--bg);
    min-height: 100vh;
  }

  .contact-form {
    max-width: 640px;
    background-color: var(--surface-raised);
    padding: var(--space-8);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-md);
    transition: transform 200ms var(--easing-standard);
  }

  @media (max-width: 768px) {
    .hero-title {
      font-size: 2.5rem;
    }

    .hero-actions {
      flex-direction: column;
      align-items: center;
    }
  }
"#;
