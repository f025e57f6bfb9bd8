//! Literal source rewrites applied when the default model moves.
//!
//! Matching is exact and case-sensitive on the whole declared string. A
//! model whose namespace line differs in any way (extra spaces, braces
//! syntax) is moved unchanged.

/// Exact-substring replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralRewrite {
    pub from: &'static str,
    pub to: &'static str,
}

impl LiteralRewrite {
    /// Replace every occurrence of `from`.
    pub fn apply(&self, source: &str) -> String {
        source.replace(self.from, self.to)
    }

    /// Whether `apply` would change anything.
    pub fn matches(&self, source: &str) -> bool {
        source.contains(self.from)
    }
}

/// Where the framework's default user model lives and where it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelRelocation {
    pub source: &'static str,
    pub destination: &'static str,
    /// Directory removed once it is left empty by the move.
    pub source_dir: &'static str,
    pub namespace: LiteralRewrite,
}

pub const MODEL_RELOCATION: ModelRelocation = ModelRelocation {
    source: "app/Models/User.php",
    destination: "src/Infrastructure/Persistence/Eloquent/Models/User.php",
    source_dir: "app/Models",
    namespace: LiteralRewrite {
        from: r"namespace App\Models;",
        to: r"namespace Src\Infrastructure\Persistence\Eloquent\Models;",
    },
};

/// `config/auth.php` provider model rewrite.
pub const AUTH_CONFIG: &str = "config/auth.php";

pub const AUTH_PROVIDER_REWRITE: LiteralRewrite = LiteralRewrite {
    from: r"App\Models\User::class",
    to: r"Src\Infrastructure\Persistence\Eloquent\Models\User::class",
};
