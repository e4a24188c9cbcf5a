//! Rust source emission.
//!
//! For every configured dimension `N` the output defines a
//! `macro_rules! swizzleN_impl` taking `($v, $v2, $v3, $v4)`: the source
//! vector type followed by the 2, 3 and 4 component vector types of the same
//! scalar. Invoking it adds every accessor of that dimension as an inherent
//! method of `$v`. The generated code calls into `crate::swizzle`, which must
//! provide `project` and `Ref2`.

use log::{debug, trace};

use crate::alias::{self, AliasGroup};
use crate::config::GeneratorConfig;
use crate::error::{Result, SwizzleError};
use crate::pattern::{self, Dimension, Pattern, MAX_LEN, MIN_LEN};

/// One accessor the generator will emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub name: String,
    pub group: AliasGroup,
    pub pattern: Pattern,
}

/// Read accessors of `dim` with `len` output components, for every group in
/// `groups`. Names are checked against the alias table.
pub fn read_accessors(dim: Dimension, len: usize, groups: &[AliasGroup]) -> Result<Vec<Accessor>> {
    let patterns = pattern::read_patterns(dim, len)?;
    let mut accessors = Vec::with_capacity(patterns.len() * groups.len());
    for &group in groups {
        for p in &patterns {
            accessors.push(checked(group, *p, dim)?);
        }
    }
    Ok(accessors)
}

/// Writable 2-component accessors of `dim`, for every group in `groups`.
pub fn write_accessors(dim: Dimension, groups: &[AliasGroup]) -> Result<Vec<Accessor>> {
    let patterns = pattern::write_patterns(dim)?;
    let mut accessors = Vec::with_capacity(patterns.len() * groups.len());
    for &group in groups {
        for p in &patterns {
            let accessor = checked(group, *p, dim)?;
            if !accessor.pattern.is_distinct() {
                return Err(SwizzleError::RepeatedIndex(accessor.name));
            }
            accessors.push(accessor);
        }
    }
    Ok(accessors)
}

fn checked(group: AliasGroup, pattern: Pattern, dim: Dimension) -> Result<Accessor> {
    let name = group.name(&pattern);
    let (resolved_group, resolved) = alias::parse(&name, dim)?;
    if resolved_group != group || resolved != pattern {
        return Err(SwizzleError::Mismatch {
            name,
            resolved: resolved.indices().to_vec(),
            expected: pattern.indices().to_vec(),
        });
    }
    trace!("{}-vector accessor {} -> {:?}", dim, name, pattern.indices());
    Ok(Accessor { name, group, pattern })
}

/// Emit the accessor macros for `config`. The output only depends on the
/// config, so the build is reproducible.
pub fn generate(config: &GeneratorConfig) -> Result<String> {
    config.validate()?;

    let mut out = Source::default();
    out.line(0, "// Generated by the swizzle crate. Do not edit.");

    for &dim in &config.dimensions {
        emit_dimension(&mut out, dim, config)?;
    }

    Ok(out.text)
}

fn emit_dimension(out: &mut Source, dim: Dimension, config: &GeneratorConfig) -> Result<()> {
    let mut reads = Vec::new();
    for len in MIN_LEN..=MAX_LEN {
        reads.push((len, read_accessors(dim, len, &config.groups)?));
    }
    let writes = if config.mutable {
        write_accessors(dim, &config.groups)?
    } else {
        Vec::new()
    };

    debug!(
        "{}-vector: {} read accessors, {} write accessors",
        dim,
        reads.iter().map(|(_, r)| r.len()).sum::<usize>(),
        writes.len()
    );

    out.line(0, "");
    out.line(0, &format!("macro_rules! swizzle{}_impl {{", dim));
    out.line(1, "($v: ident, $v2: ident, $v3: ident, $v4: ident) => {");
    out.line(2, "impl $v {");

    for (len, accessors) in &reads {
        for a in accessors {
            out.line(3, "#[inline]");
            out.line(3, &format!("pub fn {}(&self) -> $v{} {{", a.name, len));
            out.line(4, &format!("crate::swizzle::project(self, {})", array(&a.pattern)));
            out.line(3, "}");
        }
    }

    for a in &writes {
        out.line(3, "#[inline]");
        out.line(3, &format!("pub fn {}_mut(&mut self) -> crate::swizzle::Ref2<'_, $v> {{", a.name));
        out.line(4, &format!("crate::swizzle::Ref2::new(self, {})", array(&a.pattern)));
        out.line(3, "}");
        out.line(3, "#[inline]");
        out.line(3, &format!("pub fn set_{}(&mut self, value: $v2) {{", a.name));
        out.line(4, &format!("crate::swizzle::Ref2::new(self, {}).set(value)", array(&a.pattern)));
        out.line(3, "}");
    }

    out.line(2, "}");

    // Tables used by the exhaustive tests of the including crate.
    out.line(2, "#[cfg(test)]");
    out.line(2, "#[allow(dead_code)]");
    out.line(2, "impl $v {");
    for (len, accessors) in &reads {
        let sig = format!("fn(&$v) -> $v{}", len);
        out.line(
            3,
            &format!(
                "pub(crate) fn read{}_table() -> Vec<(&'static str, [usize; {}], {})> {{",
                len, len, sig
            ),
        );
        out.line(4, "vec![");
        for a in accessors {
            out.line(
                5,
                &format!("(\"{}\", {}, $v::{} as {}),", a.name, array(&a.pattern), a.name, sig),
            );
        }
        out.line(4, "]");
        out.line(3, "}");
    }
    if config.mutable {
        let set_sig = "fn(&mut $v, $v2)";
        let mut_sig = "for<'a> fn(&'a mut $v) -> crate::swizzle::Ref2<'a, $v>";
        out.line(
            3,
            &format!(
                "pub(crate) fn write_table() -> Vec<(&'static str, [usize; 2], {}, {})> {{",
                set_sig, mut_sig
            ),
        );
        out.line(4, "vec![");
        for a in &writes {
            out.line(
                5,
                &format!(
                    "(\"{}\", {}, $v::set_{} as {}, $v::{}_mut as {}),",
                    a.name,
                    array(&a.pattern),
                    a.name,
                    set_sig,
                    a.name,
                    mut_sig
                ),
            );
        }
        out.line(4, "]");
        out.line(3, "}");
    }
    out.line(2, "}");

    out.line(1, "};");
    out.line(0, "}");
    Ok(())
}

fn array(pattern: &Pattern) -> String {
    let indices: Vec<String> = pattern.indices().iter().map(|i| i.to_string()).collect();
    format!("[{}]", indices.join(", "))
}

#[derive(Default)]
struct Source {
    text: String,
}

impl Source {
    fn line(&mut self, indent: usize, s: &str) {
        if !s.is_empty() {
            for _ in 0..indent {
                self.text.push_str("    ");
            }
            self.text.push_str(s);
        }
        self.text.push('\n');
    }
}
