//! Three-register machine interpreter
//!
//! A program is a sequence of 3-bit words read as `(opcode, operand)` pairs.
//! Execution halts when the instruction pointer moves past the last word.

use crate::error::SearchError;

/// Register file of the machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Registers {
    pub a: u64,
    pub b: u64,
    pub c: u64,
}

impl Registers {
    pub fn new(a: u64, b: u64, c: u64) -> Self {
        Self { a, b, c }
    }
}

/// The eight instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `A <- A >> combo`
    Adv,
    /// `B <- B ^ literal`
    Bxl,
    /// `B <- combo % 8`
    Bst,
    /// Jump to `literal` when `A != 0`
    Jnz,
    /// `B <- B ^ C` (operand ignored)
    Bxc,
    /// Emit `combo % 8`
    Out,
    /// `B <- A >> combo`
    Bdv,
    /// `C <- A >> combo`
    Cdv,
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Opcode::Adv,
            1 => Opcode::Bxl,
            2 => Opcode::Bst,
            3 => Opcode::Jnz,
            4 => Opcode::Bxc,
            5 => Opcode::Out,
            6 => Opcode::Bdv,
            7 => Opcode::Cdv,
            other => return Err(other),
        })
    }
}

/// Machine state over a borrowed program
#[derive(Debug, Clone)]
pub struct Machine<'p> {
    program: &'p [u8],
    registers: Registers,
    ip: usize,
    output: Vec<u64>,
}

impl<'p> Machine<'p> {
    pub fn new(registers: Registers, program: &'p [u8]) -> Self {
        Self {
            program,
            registers,
            ip: 0,
            output: Vec::new(),
        }
    }

    pub fn registers(&self) -> Registers {
        self.registers
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Values emitted so far
    pub fn output(&self) -> &[u64] {
        &self.output
    }

    pub fn is_halted(&self) -> bool {
        self.ip >= self.program.len()
    }

    /// Execute one instruction
    ///
    /// # Returns
    /// * `Ok(true)` - An instruction was executed
    /// * `Ok(false)` - The machine had already halted
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidProgram` for an unknown opcode, a missing
    /// or out-of-range operand, or the reserved combo operand 7. The machine
    /// state is left unchanged in that case.
    pub fn step(&mut self) -> Result<bool, SearchError> {
        let Some(&word) = self.program.get(self.ip) else {
            return Ok(false);
        };
        let opcode = Opcode::try_from(word)
            .map_err(|code| self.invalid(format!("unknown opcode {code}")))?;
        let operand = *self
            .program
            .get(self.ip + 1)
            .ok_or_else(|| self.invalid(format!("{opcode:?} is missing its operand")))?;
        if operand > 7 {
            return Err(self.invalid(format!("operand {operand} is not a 3-bit value")));
        }

        let mut next_ip = self.ip + 2;
        match opcode {
            Opcode::Adv => self.registers.a = self.divide(operand)?,
            Opcode::Bxl => self.registers.b ^= u64::from(operand),
            Opcode::Bst => self.registers.b = self.combo(operand)? % 8,
            Opcode::Jnz => {
                if self.registers.a != 0 {
                    next_ip = usize::from(operand);
                }
            }
            Opcode::Bxc => self.registers.b ^= self.registers.c,
            Opcode::Out => {
                let value = self.combo(operand)? % 8;
                self.output.push(value);
            }
            Opcode::Bdv => self.registers.b = self.divide(operand)?,
            Opcode::Cdv => self.registers.c = self.divide(operand)?,
        }
        self.ip = next_ip;
        Ok(true)
    }

    /// Run until the machine halts and hand back the output tape
    pub fn run(mut self) -> Result<Vec<u64>, SearchError> {
        while self.step()? {}
        Ok(self.output)
    }

    fn combo(&self, operand: u8) -> Result<u64, SearchError> {
        match operand {
            0..=3 => Ok(u64::from(operand)),
            4 => Ok(self.registers.a),
            5 => Ok(self.registers.b),
            6 => Ok(self.registers.c),
            _ => Err(self.invalid(format!("combo operand {operand} is reserved"))),
        }
    }

    /// `A / 2^combo`, which is zero once the shift reaches the word size
    fn divide(&self, operand: u8) -> Result<u64, SearchError> {
        let shift = self.combo(operand)?;
        Ok(u32::try_from(shift)
            .ok()
            .and_then(|shift| self.registers.a.checked_shr(shift))
            .unwrap_or(0))
    }

    fn invalid(&self, reason: String) -> SearchError {
        SearchError::InvalidProgram {
            ip: self.ip,
            reason,
        }
    }
}

/// Run `program` from `registers` to completion
///
/// # Example
///
/// ```
/// use aoc_search::{run, Registers};
///
/// // out A
/// let output = run(Registers::new(7, 0, 0), &[5, 4]).unwrap();
/// assert_eq!(output, vec![7]);
/// ```
pub fn run(registers: Registers, program: &[u8]) -> Result<Vec<u64>, SearchError> {
    Machine::new(registers, program).run()
}
