use anchor_lang::prelude::*;

// longest event name accepted; the name doubles as a PDA seed, which the runtime caps at 32 bytes
pub const MAX_NAME_LEN: usize = 32;

pub const EVENT_SEED: &[u8] = b"event";

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Derives the address of the event `authority` registers under `name`.
pub fn event_address(authority: &Pubkey, name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EVENT_SEED, authority.as_ref(), name.as_bytes()], &ID)
}

pub fn validate_name(name: &str) -> Result<()> {
    require!(!name.is_empty(), VerfiError::EmptyName);
    require!(name.len() <= MAX_NAME_LEN, VerfiError::NameTooLong);
    Ok(())
}

#[program]
pub mod verfi {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        msg!("initialize: program={}", ctx.program_id);
        Ok(())
    }

    /// Registers a new event owned by the signer.
    /// - The event lives at the PDA `["event", signer, name]`, so one organizer
    ///   can hold a given name only once.
    /// - The signer pays rent for the new account.
    pub fn create_event(ctx: Context<CreateEvent>, name: String) -> Result<()> {
        validate_name(&name)?;

        let event = &mut ctx.accounts.event;
        event.authority = ctx.accounts.signer.key();
        event.name = name;
        event.bump = ctx.bumps.event;

        msg!("Event Created: {}", event.name);
        msg!("create_event: authority={} address={} bump={}", event.authority, event.key(), event.bump);
        Ok(())
    }
}

/* ---------------------- ACCOUNTS ---------------------- */

#[derive(Accounts)]
pub struct Initialize {}

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateEvent<'info> {
    /// Event PDA, created here: one per (signer, name)
    #[account(
        init,
        payer = signer,
        space = 8 + Event::LEN,
        seeds = [EVENT_SEED, signer.key().as_ref(), name.as_bytes()],
        bump
    )]
    pub event: Account<'info, Event>,

    /// Organizer; pays rent
    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/* ---------------------- STATE ---------------------- */

#[account]
pub struct Event {
    pub authority: Pubkey, // organizer
    pub name: String,
    pub bump: u8,
}

impl Event {
    pub const LEN: usize =
        32 + // authority
        4 + MAX_NAME_LEN + // name (borsh length prefix + bytes)
        1; // bump
}

/* ---------------------- ERRORS ---------------------- */

#[error_code]
pub enum VerfiError {
    #[msg("Event name must not be empty")]
    EmptyName,
    #[msg("Event name is too long")]
    NameTooLong,
}
