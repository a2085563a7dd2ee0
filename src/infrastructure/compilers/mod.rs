//! Secondary Compilers
//!
//! `javac`, `scalac` and `groovyc` driven as external processes. Each gets
//! its own option bag from `[compile.<compiler>]`; the classpath and output
//! directory always come from the compile unit.

use tracing::{debug, info};

use crate::config::{CompileConfig, SecondaryOptions};
use crate::domain::ports::{
    CommandRunner, CommandSpec, DelegatedCompileUnit, SecondaryCompileError, SecondaryCompiler,
    SecondaryCompilerFactory,
};
use crate::domain::value_objects::SecondaryLanguage;

/// The closed set of compilers the delegator can hand work to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryCompilerKind {
    Javac,
    Scalac,
    Groovyc,
}

impl SecondaryCompilerKind {
    pub fn for_language(language: SecondaryLanguage) -> Self {
        match language {
            SecondaryLanguage::Java => SecondaryCompilerKind::Javac,
            SecondaryLanguage::Scala => SecondaryCompilerKind::Scalac,
            SecondaryLanguage::Groovy => SecondaryCompilerKind::Groovyc,
        }
    }

    pub fn language(&self) -> SecondaryLanguage {
        match self {
            SecondaryCompilerKind::Javac => SecondaryLanguage::Java,
            SecondaryCompilerKind::Scalac => SecondaryLanguage::Scala,
            SecondaryCompilerKind::Groovyc => SecondaryLanguage::Groovy,
        }
    }

    pub fn program(&self) -> &'static str {
        self.language().compiler()
    }

    /// Commands to run, in order, for `unit`.
    ///
    /// `scalac` only emits classes for Scala sources, so a unit holding
    /// `.java` files gets a follow-up `javac` run with the Scala output on
    /// its classpath.
    pub fn commands(
        &self,
        unit: &DelegatedCompileUnit,
        options: &SecondaryOptions,
        javac_options: &SecondaryOptions,
    ) -> Vec<CommandSpec> {
        match self {
            SecondaryCompilerKind::Javac => vec![javac_command(unit, options)],
            SecondaryCompilerKind::Groovyc => vec![groovyc_command(unit, options)],
            SecondaryCompilerKind::Scalac => {
                let mut commands = vec![scalac_command(unit, options)];
                if unit.files_with_extension("java").next().is_some() {
                    let java_only = DelegatedCompileUnit {
                        files: unit.files_with_extension("java").cloned().collect(),
                        classpath: unit.classpath.with_entry(&unit.target),
                        ..unit.clone()
                    };
                    commands.push(javac_command(&java_only, javac_options));
                }
                commands
            }
        }
    }
}

fn base_command(program: &str, unit: &DelegatedCompileUnit) -> CommandSpec {
    CommandSpec::new(program)
        .flag_value("-classpath", unit.classpath.to_os_string())
        .flag_value("-d", unit.target.as_os_str())
}

fn javac_command(unit: &DelegatedCompileUnit, options: &SecondaryOptions) -> CommandSpec {
    let mut cmd = base_command("javac", unit);
    if let Some(source) = &options.source {
        cmd = cmd.flag_value("-source", source);
    }
    if let Some(target) = &options.target {
        cmd = cmd.flag_value("-target", target);
    }
    if options.debug {
        cmd = cmd.arg("-g");
    }
    if !options.warnings {
        cmd = cmd.arg("-nowarn");
    }
    cmd.args(&options.other)
        .args(unit.files_with_extension("java").map(|f| f.as_os_str()))
}

fn scalac_command(unit: &DelegatedCompileUnit, options: &SecondaryOptions) -> CommandSpec {
    let mut cmd = base_command("scalac", unit);
    if let Some(target) = &options.target {
        cmd = cmd.arg(format!("-target:jvm-{}", target));
    }
    if options.debug {
        cmd = cmd.arg("-g:vars");
    }
    if !options.warnings {
        cmd = cmd.arg("-nowarn");
    }
    cmd.args(&options.other)
        .args(unit.files.iter().map(|f| f.as_os_str()))
}

fn groovyc_command(unit: &DelegatedCompileUnit, options: &SecondaryOptions) -> CommandSpec {
    let mut cmd = base_command("groovyc", unit).arg("-j");
    if let Some(source) = &options.source {
        cmd = cmd.arg(format!("-Jsource={}", source));
    }
    if let Some(target) = &options.target {
        cmd = cmd.arg(format!("-Jtarget={}", target));
    }
    if options.debug {
        cmd = cmd.arg("-Fg");
    }
    if !options.warnings {
        cmd = cmd.arg("-Fnowarn");
    }
    cmd.args(&options.other)
        .args(unit.files.iter().map(|f| f.as_os_str()))
}

/// One secondary compiler bound to a runner and its options
pub struct ExternalCompiler<'r, R> {
    kind: SecondaryCompilerKind,
    runner: &'r R,
    options: SecondaryOptions,
    javac_options: SecondaryOptions,
}

impl<R: CommandRunner> SecondaryCompiler for ExternalCompiler<'_, R> {
    fn language(&self) -> SecondaryLanguage {
        self.kind.language()
    }

    fn compile(&self, unit: &DelegatedCompileUnit) -> Result<(), SecondaryCompileError> {
        info!(
            compiler = self.kind.program(),
            files = unit.files.len(),
            target = %unit.target.display(),
            "delegating secondary sources"
        );

        for command in self.kind.commands(unit, &self.options, &self.javac_options) {
            let compiler = command.program.to_string_lossy().into_owned();
            debug!(command = %command, "invoking secondary compiler");

            let output = self
                .runner
                .run(&command)
                .map_err(|source| SecondaryCompileError::Launch {
                    compiler: compiler.clone(),
                    source,
                })?;

            if !output.is_success() {
                return Err(SecondaryCompileError::Failed {
                    compiler,
                    status: output.status_description(),
                    output: output.combined(),
                });
            }
        }
        Ok(())
    }
}

/// Factory handing out [`ExternalCompiler`]s over a shared runner
pub struct ExternalCompilers<R> {
    runner: R,
    config: CompileConfig,
}

impl<R: CommandRunner> ExternalCompilers<R> {
    pub fn new(runner: R, config: CompileConfig) -> Self {
        Self { runner, config }
    }
}

impl<R: CommandRunner> SecondaryCompilerFactory for ExternalCompilers<R> {
    fn create(&self, language: SecondaryLanguage) -> Box<dyn SecondaryCompiler + '_> {
        Box::new(ExternalCompiler {
            kind: SecondaryCompilerKind::for_language(language),
            runner: &self.runner,
            options: self.config.secondary_options(language).clone(),
            javac_options: self.config.javac.clone(),
        })
    }
}
