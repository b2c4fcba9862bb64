//! Built-in icon data. Glyphs are Nerd Font code points; colours are xterm-256 indices.

use super::ClassificationTable;
use crate::model::{IconDescriptor as Icon, MatchTier};

const DEFAULT: Icon = Icon::new("default", "\u{e612}", 66);

const DOCKER: Icon = Icon::new("docker", "\u{f0868}", 68);
const NPM: Icon = Icon::new("npm", "\u{e71e}", 197);
const GO_MODULE: Icon = Icon::new("go-module", "\u{e627}", 38);
const GITIGNORE: Icon = Icon::new("gitignore", "\u{e702}", 196);
const LOCK: Icon = Icon::new("lock", "\u{e672}", 250);
const PYTHON_PROJECT: Icon = Icon::new("python-project", "\u{e606}", 214);
const YAML: Icon = Icon::new("yaml", "\u{e615}", 59);
const SHELL: Icon = Icon::new("shell", "\u{e795}", 59);
const IMAGE_JPEG: Icon = Icon::new("jpeg", "\u{e60d}", 140);
const CPP: Icon = Icon::new("cpp", "\u{e61d}", 167);
const ELIXIR: Icon = Icon::new("elixir", "\u{e62d}", 140);
const MARKDOWN: Icon = Icon::new("markdown", "\u{f48a}", 231);
const TEXT: Icon = Icon::new("txt", "\u{f0219}", 113);

const FILE_NAMES: &[(&str, Icon)] = &[
    ("Dockerfile", DOCKER),
    ("dockerfile", DOCKER),
    ("docker-compose.yml", DOCKER),
    ("docker-compose.yaml", DOCKER),
    ("compose.yml", DOCKER),
    ("compose.yaml", DOCKER),
    ("Makefile", Icon::new("makefile", "\u{e779}", 66)),
    ("makefile", Icon::new("makefile", "\u{e779}", 66)),
    ("CMakeLists.txt", Icon::new("cmake", "\u{e794}", 66)),
    ("Cargo.toml", Icon::new("cargo", "\u{e7a8}", 216)),
    ("Cargo.lock", LOCK),
    ("package.json", NPM),
    ("package-lock.json", NPM),
    ("yarn.lock", LOCK),
    ("pnpm-lock.yaml", LOCK),
    ("tsconfig.json", Icon::new("tsconfig", "\u{e69d}", 74)),
    ("vite.config.ts", Icon::new("vite", "\u{e8d7}", 214)),
    ("vite.config.js", Icon::new("vite", "\u{e8d7}", 214)),
    ("go.mod", GO_MODULE),
    ("go.sum", GO_MODULE),
    ("pyproject.toml", PYTHON_PROJECT),
    ("requirements.txt", PYTHON_PROJECT),
    ("Gemfile", Icon::new("gemfile", "\u{e791}", 52)),
    ("flake.nix", Icon::new("nix", "\u{f313}", 110)),
    (".gitignore", GITIGNORE),
    (".gitmodules", GITIGNORE),
    (".gitattributes", Icon::new("gitattributes", "\u{e702}", 196)),
    (".bashrc", Icon::new("bashrc", "\u{e615}", 113)),
    (".zshrc", Icon::new("zshrc", "\u{e615}", 113)),
    (".editorconfig", Icon::new("editorconfig", "\u{e652}", 255)),
    ("LICENSE", Icon::new("license", "\u{e60a}", 185)),
    ("LICENSE.md", Icon::new("license", "\u{e60a}", 185)),
    ("README.md", Icon::new("readme", "\u{f00ba}", 231)),
    ("README", Icon::new("readme", "\u{f00ba}", 231)),
];

const OPERATING_SYSTEMS: &[(&str, Icon)] = &[
    ("apple", Icon::new("apple", "\u{e711}", 248)),
    ("arch", Icon::new("arch", "\u{f303}", 33)),
    ("debian", Icon::new("debian", "\u{f306}", 88)),
    ("fedora", Icon::new("fedora", "\u{f30a}", 32)),
    ("freebsd", Icon::new("freebsd", "\u{f30c}", 160)),
    ("linux", Icon::new("linux", "\u{f31a}", 237)),
    ("nixos", Icon::new("nixos", "\u{f313}", 110)),
    ("ubuntu", Icon::new("ubuntu", "\u{f31b}", 196)),
    ("windows", Icon::new("windows", "\u{f17a}", 32)),
];

const DESKTOP_ENVIRONMENTS: &[(&str, Icon)] = &[
    ("budgie", Icon::new("budgie", "\u{f360}", 69)),
    ("cinnamon", Icon::new("cinnamon", "\u{f35f}", 94)),
    ("gnome", Icon::new("gnome", "\u{f361}", 15)),
    ("kde", Icon::new("kde", "\u{f373}", 69)),
    ("lxde", Icon::new("lxde", "\u{f363}", 33)),
    ("mate", Icon::new("mate", "\u{f371}", 34)),
    ("xfce", Icon::new("xfce", "\u{f368}", 32)),
];

const WINDOW_MANAGERS: &[(&str, Icon)] = &[
    ("awesome", Icon::new("awesome", "\u{f354}", 52)),
    ("bspwm", Icon::new("bspwm", "\u{f355}", 240)),
    ("dwm", Icon::new("dwm", "\u{f356}", 66)),
    ("hyprland", Icon::new("hyprland", "\u{f359}", 38)),
    ("i3", Icon::new("i3", "\u{f35a}", 235)),
    ("qtile", Icon::new("qtile", "\u{f35c}", 239)),
    ("sway", Icon::new("sway", "\u{f35d}", 68)),
    ("xmonad", Icon::new("xmonad", "\u{f35e}", 167)),
];

// js, cjs and mjs share a glyph on purpose; they only render once.
const EXTENSIONS: &[(&str, Icon)] = &[
    ("html", Icon::new("html", "\u{e736}", 196)),
    ("htm", Icon::new("html", "\u{e736}", 196)),
    ("css", Icon::new("css", "\u{e749}", 32)),
    ("scss", Icon::new("scss", "\u{e603}", 204)),
    ("js", Icon::new("js", "\u{e74e}", 185)),
    ("cjs", Icon::new("cjs", "\u{e74e}", 185)),
    ("mjs", Icon::new("mjs", "\u{e74e}", 185)),
    ("jsx", Icon::new("react", "\u{e7ba}", 45)),
    ("ts", Icon::new("typescript", "\u{e628}", 74)),
    ("tsx", Icon::new("react-ts", "\u{e7ba}", 26)),
    ("vue", Icon::new("vue", "\u{e6a0}", 113)),
    ("svelte", Icon::new("svelte", "\u{e697}", 196)),
    ("json", Icon::new("json", "\u{e60b}", 185)),
    ("yaml", YAML),
    ("yml", YAML),
    ("toml", Icon::new("toml", "\u{e6b2}", 124)),
    ("xml", Icon::new("xml", "\u{f05c0}", 173)),
    ("md", MARKDOWN),
    ("markdown", MARKDOWN),
    ("txt", TEXT),
    ("log", Icon::new("log", "\u{f0331}", 255)),
    ("lock", LOCK),
    ("rs", Icon::new("rust", "\u{e7a8}", 216)),
    ("go", Icon::new("go", "\u{e627}", 38)),
    ("py", Icon::new("python", "\u{e606}", 214)),
    ("ipynb", Icon::new("notebook", "\u{e678}", 214)),
    ("lua", Icon::new("lua", "\u{e620}", 74)),
    ("sh", SHELL),
    ("bash", SHELL),
    ("zsh", Icon::new("zsh", "\u{e795}", 113)),
    ("fish", Icon::new("fish", "\u{e795}", 240)),
    ("c", Icon::new("c", "\u{e61e}", 111)),
    ("h", Icon::new("header", "\u{f0fd}", 140)),
    ("cpp", CPP),
    ("cc", CPP),
    ("hpp", Icon::new("cpp-header", "\u{f0fd}", 140)),
    ("cs", Icon::new("csharp", "\u{f031b}", 58)),
    ("java", Icon::new("java", "\u{e738}", 167)),
    ("kt", Icon::new("kotlin", "\u{e634}", 99)),
    ("swift", Icon::new("swift", "\u{e755}", 173)),
    ("dart", Icon::new("dart", "\u{e798}", 25)),
    ("rb", Icon::new("ruby", "\u{e791}", 52)),
    ("php", Icon::new("php", "\u{e608}", 140)),
    ("ex", ELIXIR),
    ("exs", ELIXIR),
    ("hs", Icon::new("haskell", "\u{e61f}", 140)),
    ("zig", Icon::new("zig", "\u{e6a9}", 172)),
    ("nix", Icon::new("nix", "\u{f313}", 110)),
    ("vim", Icon::new("vim", "\u{e62b}", 28)),
    ("sql", Icon::new("sql", "\u{e706}", 188)),
    ("wasm", Icon::new("wasm", "\u{e6a1}", 62)),
    ("gd", Icon::new("gdscript", "\u{e65f}", 66)),
    ("godot", Icon::new("godot-project", "\u{e65f}", 66)),
    ("tres", Icon::new("godot-resource", "\u{e65f}", 59)),
    ("tscn", Icon::new("godot-scene", "\u{e65f}", 59)),
    ("blend", Icon::new("blender", "\u{f00ab}", 208)),
    ("png", Icon::new("png", "\u{e60d}", 140)),
    ("jpg", IMAGE_JPEG),
    ("jpeg", IMAGE_JPEG),
    ("gif", Icon::new("gif", "\u{e60d}", 140)),
    ("svg", Icon::new("svg", "\u{f0721}", 214)),
    ("ico", Icon::new("ico", "\u{e60d}", 185)),
    ("pdf", Icon::new("pdf", "\u{e67d}", 124)),
    ("zip", Icon::new("zip", "\u{f410}", 172)),
];

const IGNORED: &[&str] = &["default", "license", "gitignore", "gitattributes", "lock", "log"];

pub(super) fn table() -> ClassificationTable {
    ClassificationTable::new(
        vec![
            (MatchTier::FileName, FILE_NAMES),
            (MatchTier::OperatingSystem, OPERATING_SYSTEMS),
            (MatchTier::DesktopEnvironment, DESKTOP_ENVIRONMENTS),
            (MatchTier::WindowManager, WINDOW_MANAGERS),
        ],
        EXTENSIONS,
        DEFAULT,
        IGNORED,
    )
}
