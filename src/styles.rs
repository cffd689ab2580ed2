pub const LOADED_CLASS: &str = "loaded";
pub const STYLE_ELEMENT_ID: &str = "portfolio-behaviors-style";

/// Keyframes and auxiliary rules the behaviors rely on. Appended to `<head>` once.
pub const INJECTED_CSS: &str = r#"
  body:not(.loaded) {
    overflow: hidden;
  }

  body:not(.loaded) .hero__content {
    opacity: 0;
  }

  body.loaded .hero__content {
    animation: fadeIn 1s var(--ease-standard) forwards;
  }

  @keyframes fadeIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
  }

  @keyframes ripple {
    to {
      transform: scale(4);
      opacity: 0;
    }
  }

  .notification__content {
    display: flex;
    align-items: center;
    gap: var(--space-12);
  }

  .notification__close {
    background: none;
    border: none;
    color: var(--color-text-secondary);
    cursor: pointer;
    font-size: var(--font-size-lg);
    padding: 0;
    margin-left: auto;
  }

  .notification__close:hover {
    color: var(--color-text);
  }

  .skill-card__icon {
    transition: transform var(--duration-normal) var(--ease-standard);
  }

  .project-card {
    transition: transform var(--duration-normal) var(--ease-standard);
  }

  .btn {
    position: relative;
    overflow: hidden;
  }

  .btn::before {
    content: '';
    position: absolute;
    top: 50%;
    left: 50%;
    width: 0;
    height: 0;
    background: rgba(255, 255, 255, 0.2);
    border-radius: var(--radius-full);
    transform: translate(-50%, -50%);
    transition: width 0.6s, height 0.6s;
    pointer-events: none;
  }

  .btn:hover::before {
    width: 300px;
    height: 300px;
  }

  .nav__link.active {
    color: var(--color-primary);
  }

  .nav__link.active::after {
    width: 100%;
  }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injected_css_defines_the_keyframes_behaviors_reference() {
        assert!(INJECTED_CSS.contains("@keyframes ripple"));
        assert!(INJECTED_CSS.contains("@keyframes fadeIn"));
        assert!(INJECTED_CSS.contains(".nav__link.active"));
        assert_eq!(INJECTED_CSS.matches('{').count(), INJECTED_CSS.matches('}').count());
    }
}
