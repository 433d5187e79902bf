//! Built-in registration table
//!
//! The table is plain data, folded into a [`FileTypeRegistry`](crate::registry::FileTypeRegistry)
//! in declaration order:
//!
//! - [`TYPES`]: every descriptor, keyed by its unique id.
//! - [`BINDINGS`]: `(file spec, type id, icon name)`; the spec is `""` for
//!   extensionless files, `"*.ext"` for an extension, or an exact file name.
//!   A later binding for the same key replaces an earlier one.
//! - [`ICONS`]: icon-only extensions (images, office documents) that have no
//!   file type of their own.

use crate::capability::{Capabilities as C, WordWrap};
use crate::file_type::{FileTypeDescriptor as T, FileTypeKind, TextTraits, BROWSER_TYPE_ID, TEXT_TYPE_ID};
use crate::icon::FileIcon;

const fn plain(id: &'static str, label: &'static str, language: &'static str, extension: &'static str, icon: &'static str) -> T {
    T::text(id, label, language, extension, icon, C::NONE)
}

pub static TYPES: &[T] = &[
    T::new(
        TEXT_TYPE_ID,
        "Text File",
        "text-x-generic",
        None,
        FileTypeKind::Text(TextTraits::new(Some("text"), C::CHECK_SPELLING)),
    ),
    T::text("r_source", "R Script", "r", ".R", "text-x-r", C::SOURCE_ON_SAVE.union(C::EXECUTE_CODE).union(C::PREVIEW_FROM_R)),
    T::text("r_doc", "Rd File", "rdoc", ".Rd", "text-x-rd", C::SOURCE_ON_SAVE.union(C::PREVIEW_HTML).union(C::CHECK_SPELLING)),
    plain("dcf", "DCF", "dcf", ".dcf", "text-x-dcf"),
    plain("ini", "INI", "ini", ".ini", "text-x-dcf"),
    T::text("stan", "Stan", "stan", ".stan", "text-x-stan", C::SOURCE_ON_SAVE),
    T::text("mermaid", "Mermaid", "mermaid", ".mmd", "text-x-mermaid", C::SOURCE_ON_SAVE.union(C::PREVIEW_HTML)),
    T::text("graphviz", "Graphviz", "graphviz", ".gv", "text-x-graphviz", C::SOURCE_ON_SAVE.union(C::PREVIEW_HTML)),
    T::new(
        "r_namespace",
        "NAMESPACE",
        "text-x-generic",
        None,
        FileTypeKind::Text(TextTraits::new(Some("r"), C::NONE)),
    ),
    T::text("sweave", "R Sweave", "sweave", ".Rnw", "text-x-sweave", C::EXECUTE_CODE.union(C::COMPILE_PDF).union(C::CHECK_SPELLING)),
    T::text("tex", "TeX", "tex", ".tex", "text-x-tex", C::COMPILE_PDF.union(C::CHECK_SPELLING)),
    T::new(
        "r_history",
        "R History",
        "text-x-rhistory",
        Some(".Rhistory"),
        FileTypeKind::Text(TextTraits::new(None, C::NONE)),
    ),
    T::web_content("r_markdown", "R Markdown", "rmarkdown", ".Rmd", "text-x-rmarkdown", C::EXECUTE_CODE.union(C::KNIT).union(C::CHECK_SPELLING)),
    T::web_content("quarto", "Quarto Document", "quarto", ".qmd", "text-x-quarto", C::EXECUTE_CODE.union(C::KNIT).union(C::CHECK_SPELLING)),
    T::web_content("r_presentation", "R Presentation", "rmarkdown", ".Rpres", "text-x-rpresentation", C::EXECUTE_CODE.union(C::CHECK_SPELLING)),
    T::web_content("markdown", "Markdown", "markdown", ".md", "text-markdown", C::PREVIEW_HTML.union(C::CHECK_SPELLING)),
    T::web_content("r_html", "R HTML", "rhtml", ".Rhtml", "text-x-rhtml", C::EXECUTE_CODE.union(C::KNIT)),
    T::web_content("html", "HTML", "html", ".html", "text-html", C::PREVIEW_HTML),
    plain("css", "CSS", "css", ".css", "text-css"),
    plain("scss", "SCSS", "scss", ".scss", "text-x-scss"),
    plain("sass", "SASS", "sass", ".sass", "text-x-scss"),
    plain("less", "LESS", "less", ".less", "text-x-less"),
    T::text("js", "JavaScript", "javascript", ".js", "text-javascript", C::SOURCE_ON_SAVE),
    plain("json", "JSON", "javascript", ".json", "text-javascript"),
    T::text("python", "Python", "python", ".py", "text-x-python", C::EXECUTE_CODE.union(C::SOURCE_ON_SAVE).union(C::SCRIPT)),
    T::text("sql", "SQL", "sql", ".sql", "text-x-sql", C::SOURCE_ON_SAVE),
    T::text("sh", "Shell", "sh", ".sh", "text-x-script", C::EXECUTE_CODE.union(C::SCRIPT)),
    plain("toml", "TOML", "toml", ".toml", "text-x-toml"),
    plain("yaml", "YAML", "yaml", ".yml", "text-x-yaml"),
    plain("xml", "XML", "xml", ".xml", "text-xml"),
    T::text("h", "C/C++ Header", "cpp", ".h", "text-x-chdr", C::SOURCE_ON_SAVE),
    plain("c", "C", "cpp", ".c", "text-x-csrc"),
    T::text("hpp", "C++ Header", "cpp", ".hpp", "text-x-c++hdr", C::SOURCE_ON_SAVE),
    T::text("cpp", "C++", "cpp", ".cpp", "text-x-c++src", C::SOURCE_ON_SAVE.union(C::EXECUTE_CODE)),
    plain("clojure", "Clojure", "clojure", ".clj", "text-x-clojure"),
    plain("coffee", "Coffee", "coffee", ".coffee", "text-x-coffee"),
    plain("csharp", "C#", "csharp", ".cs", "text-x-csharp"),
    plain("dockerfile", "Dockerfile", "dockerfile", "Dockerfile", "text-x-dockerfile"),
    plain("fortran", "Fortran", "fortran", ".f", "text-x-fortran"),
    plain("gitignore", "Gitignore", "gitignore", ".gitignore", "text-x-gitignore"),
    plain("go", "Go", "go", ".go", "text-x-go"),
    plain("groovy", "Groovy", "groovy", ".groovy", "text-x-groovy"),
    plain("haskell", "Haskell", "haskell", ".haskell", "text-x-haskell"),
    plain("haxe", "Haxe", "haxe", ".haxe", "text-x-haxe"),
    plain("java", "Java", "java", ".java", "text-x-java"),
    plain("julia", "Julia", "julia", ".jl", "text-x-julia"),
    plain("lisp", "Lisp", "lisp", ".lisp", "text-x-lisp"),
    plain("lua", "Lua", "lua", ".lua", "text-x-lua"),
    plain("makefile", "Makefile", "makefile", ".makefile", "text-x-makefile"),
    plain("matlab", "Matlab", "matlab", ".m", "text-x-matlab"),
    plain("perl", "Perl", "perl", ".pl", "text-x-perl"),
    plain("ruby", "Ruby", "ruby", ".rb", "text-x-ruby"),
    plain("rust", "Rust", "rust", ".rs", "text-rust"),
    plain("scala", "Scala", "scala", ".scala", "text-x-scala"),
    T::new(
        "snippets",
        "Snippets",
        "text-x-snippets",
        Some(".snippets"),
        FileTypeKind::Text(TextTraits::new(Some("snippets"), C::NONE).with_word_wrap(WordWrap::Off)),
    ),
    T::new("r_data", "R Workspace", "application-x-rdata", Some(".RData"), FileTypeKind::Data),
    T::new("rds", "R Data", "application-x-rdata", Some(".rds"), FileTypeKind::Data),
    T::new("r_project", "R Project", "application-x-rproject", Some(".Rproj"), FileTypeKind::Project),
    T::new("profiler", "R Profiler", "application-x-rprofvis", Some(".Rprofvis"), FileTypeKind::Profiler),
    T::new(BROWSER_TYPE_ID, "Browser", "text-html", None, FileTypeKind::Browser),
];

pub static BINDINGS: &[(&str, &str, &str)] = &[
    ("", "text", "text-x-generic"),
    (".Rbuildignore", "text", "text-x-generic"),
    (".Renviron", "sh", "text-x-script"),
    (".Rprofile", "r_source", "text-x-rprofile"),
    (".emacs", "lisp", "text-x-lisp"),
    (".env", "sh", "text-x-script"),
    (".gitignore", "gitignore", "text-x-gitignore"),
    (".lintr", "text", "text-x-generic"),
    ("BUGS", "text", "text-x-generic"),
    ("CHANGELOG", "text", "text-x-generic"),
    ("CHANGES", "text", "text-x-generic"),
    ("CITATION", "text", "text-x-generic"),
    ("COPYING", "text", "text-x-generic"),
    ("COPYING.LIB", "text", "text-x-generic"),
    ("DESCRIPTION", "dcf", "text-x-dcf"),
    ("Dockerfile", "dockerfile", "text-x-dockerfile"),
    ("GNUmakefile", "makefile", "text-x-makefile"),
    ("INDEX", "text", "text-x-generic"),
    ("INSTALL", "sh", "text-x-script"),
    ("Jenkinsfile", "groovy", "text-x-groovy"),
    ("LICENCE", "text", "text-x-generic"),
    ("LICENSE", "text", "text-x-generic"),
    ("MD5", "text", "text-x-generic"),
    ("Makefile", "makefile", "text-x-makefile"),
    ("Makefile.in", "makefile", "text-x-makefile"),
    ("Makefile.win", "makefile", "text-x-makefile"),
    ("Makevars", "makefile", "text-x-makefile"),
    ("Makevars.in", "makefile", "text-x-makefile"),
    ("Makevars.win", "makefile", "text-x-makefile"),
    ("NAMESPACE", "r_namespace", "text-x-generic"),
    ("NEWS", "text", "text-x-generic"),
    ("PORTING", "text", "text-x-generic"),
    ("README", "text", "text-x-generic"),
    ("Renviron.site", "sh", "text-x-script"),
    ("Rprofile.site", "r_source", "text-x-rprofile"),
    ("Snakefile", "python", "text-x-python"),
    ("THANKS", "text", "text-x-generic"),
    ("TODO", "text", "text-x-generic"),
    ("TUTORIAL", "dcf", "text-x-dcf"),
    ("cleanup", "sh", "text-x-script"),
    ("cleanup.win", "sh", "text-x-script"),
    ("configure", "sh", "text-x-script"),
    ("configure.win", "sh", "text-x-script"),
    ("makefile", "makefile", "text-x-makefile"),
    ("packrat.lock", "dcf", "text-x-dcf"),
    ("renv.lock", "json", "text-x-dcf"),
    ("*.Rprofvis", "profiler", "application-x-rprofvis"),
    ("*.Rproj", "r_project", "application-x-rproject"),
    ("*.bbl", "tex", "text-x-tex"),
    ("*.bib", "text", "text-x-generic"),
    ("*.c", "c", "text-x-csrc"),
    ("*.cc", "cpp", "text-x-c++src"),
    ("*.clj", "clojure", "text-x-clojure"),
    ("*.cloj", "clojure", "text-x-clojure"),
    ("*.clojure", "clojure", "text-x-clojure"),
    ("*.cls", "tex", "text-x-tex"),
    ("*.coffee", "coffee", "text-x-coffee"),
    ("*.cpp", "cpp", "text-x-c++src"),
    ("*.cs", "csharp", "text-x-csharp"),
    ("*.css", "css", "text-css"),
    ("*.dcf", "dcf", "text-x-dcf"),
    ("*.dot", "graphviz", "text-x-graphviz"),
    ("*.dtx", "tex", "text-x-tex"),
    ("*.el", "lisp", "text-x-lisp"),
    ("*.f", "fortran", "text-x-fortran"),
    ("*.f", "text", "text-x-generic"),
    ("*.f03", "fortran", "text-x-fortran"),
    ("*.f90", "fortran", "text-x-fortran"),
    ("*.f95", "fortran", "text-x-fortran"),
    ("*.go", "go", "text-x-go"),
    ("*.groovy", "groovy", "text-x-groovy"),
    ("*.gv", "graphviz", "text-x-graphviz"),
    ("*.h", "h", "text-x-chdr"),
    ("*.haskell", "haskell", "text-x-haskell"),
    ("*.haxe", "haxe", "text-x-haxe"),
    ("*.hh", "hpp", "text-x-c++hdr"),
    ("*.hpp", "hpp", "text-x-c++hdr"),
    ("*.htm", "html", "text-html"),
    ("*.html", "html", "text-html"),
    ("*.ini", "ini", "text-x-dcf"),
    ("*.ins", "tex", "text-x-tex"),
    ("*.java", "java", "text-x-java"),
    ("*.jl", "julia", "text-x-julia"),
    ("*.js", "js", "text-javascript"),
    ("*.json", "json", "text-javascript"),
    ("*.julia", "julia", "text-x-julia"),
    ("*.latex", "tex", "text-x-tex"),
    ("*.less", "less", "text-x-less"),
    ("*.lisp", "lisp", "text-x-lisp"),
    ("*.log", "text", "text-x-generic"),
    ("*.lua", "lua", "text-x-lua"),
    ("*.m", "matlab", "text-x-matlab"),
    ("*.make", "makefile", "text-x-makefile"),
    ("*.markdown", "markdown", "text-markdown"),
    ("*.md", "markdown", "text-markdown"),
    ("*.mdtxt", "markdown", "text-markdown"),
    ("*.mmd", "mermaid", "text-x-mermaid"),
    ("*.nf", "groovy", "text-x-groovy"),
    ("*.nw", "sweave", "text-x-sweave"),
    ("*.ojs", "js", "text-javascript"),
    ("*.pl", "perl", "text-x-perl"),
    ("*.py", "python", "text-x-python"),
    ("*.q", "r_source", "text-x-r"),
    ("*.qmd", "quarto", "text-x-quarto"),
    ("*.r", "r_source", "text-x-r"),
    ("*.rb", "ruby", "text-x-ruby"),
    ("*.rd", "r_doc", "text-x-rd"),
    ("*.rda", "r_data", "application-x-rdata"),
    ("*.rdata", "r_data", "application-x-rdata"),
    ("*.rds", "rds", "application-x-rdata"),
    ("*.rhistory", "r_history", "text-x-rhistory"),
    ("*.rhtml", "r_html", "text-x-rhtml"),
    ("*.rmarkdown", "r_markdown", "text-x-rmarkdown"),
    ("*.rmd", "r_markdown", "text-x-rmarkdown"),
    ("*.rnw", "sweave", "text-x-sweave"),
    ("*.rpres", "r_presentation", "text-x-rpresentation"),
    ("*.rproj", "r_project", "application-x-rproject"),
    ("*.rs", "rust", "text-rust"),
    ("*.rtex", "sweave", "text-x-sweave"),
    ("*.s", "r_source", "text-x-r"),
    ("*.sass", "sass", "text-x-scss"),
    ("*.scala", "scala", "text-x-scala"),
    ("*.scss", "scss", "text-x-scss"),
    ("*.sh", "sh", "text-x-script"),
    ("*.smk", "python", "text-x-python"),
    ("*.snippets", "snippets", "text-x-snippets"),
    ("*.snw", "sweave", "text-x-sweave"),
    ("*.sql", "sql", "text-x-sql"),
    ("*.stan", "stan", "text-x-stan"),
    ("*.sty", "tex", "text-x-tex"),
    ("*.tex", "tex", "text-x-tex"),
    ("*.tml", "toml", "text-x-toml"),
    ("*.toml", "toml", "text-x-toml"),
    ("*.ts", "js", "text-javascript"),
    ("*.txt", "text", "text-x-generic"),
    ("*.xml", "xml", "text-xml"),
    ("*.yaml", "yaml", "text-x-yaml"),
    ("*.yml", "yaml", "text-x-yaml"),
];

pub static ICONS: &[(&str, FileIcon)] = &[
    ("jpg", FileIcon::from_static("image-x-generic", "JPG")),
    ("jpeg", FileIcon::from_static("image-x-generic", "JPEG")),
    ("gif", FileIcon::from_static("image-x-generic", "GIF")),
    ("bmp", FileIcon::from_static("image-x-generic", "BMP")),
    ("tiff", FileIcon::from_static("image-x-generic", "TIFF")),
    ("tif", FileIcon::from_static("image-x-generic", "TIF")),
    ("png", FileIcon::from_static("image-x-generic", "PNG")),
    ("webp", FileIcon::from_static("image-x-generic", "WEBP")),
    ("pdf", FileIcon::PDF),
    ("csv", FileIcon::CSV),
    ("docx", FileIcon::WORD),
    ("pptx", FileIcon::POWERPOINT),
];
