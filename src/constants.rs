//! Constants used throughout the vitegen application

/// Tailwind configuration file, written at the project root
pub const TAILWIND_CONFIG_FILE: &str = "tailwind.config.js";

/// Stylesheet entry point, written inside the generated `src` directory
pub const INDEX_CSS_FILE: &str = "src/index.css";

/// Packages installed as development dependencies by the Tailwind stage
pub const TAILWIND_PACKAGES: &[&str] = &["tailwindcss", "postcss", "autoprefixer"];

/// Install option marking packages as development dependencies
pub const DEV_DEPENDENCY_FLAG: &str = "-D";

/// Contents of the Tailwind configuration file
pub const TAILWIND_CONFIG_CONTENT: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

/// Contents of the stylesheet entry point
pub const INDEX_CSS_CONTENT: &str = "@tailwind base;
@tailwind components;
@tailwind utilities;
";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
