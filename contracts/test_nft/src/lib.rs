#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, log, symbol_short,
    Address, Env,
};

contractmeta!(key = "Description", val = "Sequential-mint NFT registry");

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger

const INSTANCE_TTL_THRESHOLD: u32 = ONE_DAY_LEDGERS * 30;
const INSTANCE_TTL_BUMP: u32 = INSTANCE_TTL_THRESHOLD + ONE_DAY_LEDGERS;

const TOKEN_TTL_THRESHOLD: u32 = ONE_DAY_LEDGERS * 100;
const TOKEN_TTL_BUMP: u32 = TOKEN_TTL_THRESHOLD + 20 * ONE_DAY_LEDGERS;

#[contracttype]
pub enum DataKey {
    NextTokenId,
    Owner(u32),
    Balance(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Queried id was never minted.
    UnknownToken = 1,
    /// No token ids left to issue.
    TokenIdOverflow = 2,
}

#[contract]
pub struct TestNft;

#[contractimpl]
impl TestNft {
    /// Mints the next token id to `caller`.
    ///
    /// Anyone may mint. Ids start at 0 and are never reused.
    pub fn safe_mint(env: Env, caller: Address) -> Result<u32, Error> {
        caller.require_auth();

        let token_id = Self::next_token_id(&env);
        let next = token_id.checked_add(1).ok_or(Error::TokenIdOverflow)?;

        let owner_key = DataKey::Owner(token_id);
        env.storage().persistent().set(&owner_key, &caller);
        env.storage()
            .persistent()
            .extend_ttl(&owner_key, TOKEN_TTL_THRESHOLD, TOKEN_TTL_BUMP);

        let balance_key = DataKey::Balance(caller.clone());
        let balance = Self::balance(env.clone(), caller.clone());
        env.storage().persistent().set(&balance_key, &(balance + 1));
        env.storage()
            .persistent()
            .extend_ttl(&balance_key, TOKEN_TTL_THRESHOLD, TOKEN_TTL_BUMP);

        env.storage().instance().set(&DataKey::NextTokenId, &next);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_BUMP);

        log!(&env, "minted token", token_id, caller);
        env.events().publish((symbol_short!("mint"), caller), token_id);

        Ok(token_id)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(Error::UnknownToken)
    }

    pub fn balance(env: Env, owner: Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    /// Number of tokens minted so far. Tokens are never burned, so this is
    /// also the next id to be issued.
    pub fn total_supply(env: Env) -> u32 {
        Self::next_token_id(&env)
    }
}

impl TestNft {
    fn next_token_id(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::NextTokenId)
            .unwrap_or(0)
    }
}
