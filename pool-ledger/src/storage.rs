use shared::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_BUMP_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_BUMP_THRESHOLD,
    },
    errors::Error,
};
use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Participant, Pool, PoolConfig};

fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_BUMP_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance(env);
}

pub fn get_config(env: &Env) -> Result<PoolConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&DataKey::Pool, pool);
    extend_instance(env);
}

pub fn get_pool(env: &Env) -> Result<Pool, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(Error::NotInitialized)
}

pub fn is_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Lock)
        .unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Lock, &true);
    } else {
        env.storage().instance().remove(&DataKey::Lock);
    }
}

/// Reading the list keeps it alive; it is only rewritten on registration
pub fn get_participants(env: &Env) -> Vec<Address> {
    let key = DataKey::Participants;
    match env.storage().persistent().get(&key) {
        Some(participants) => {
            extend_persistent(env, &key);
            participants
        }
        None => Vec::new(env),
    }
}

pub fn set_participants(env: &Env, participants: &Vec<Address>) {
    let key = DataKey::Participants;
    env.storage().persistent().set(&key, participants);
    extend_persistent(env, &key);
}

pub fn get_participant(env: &Env, identity: &Address) -> Option<Participant> {
    let key = DataKey::Participant(identity.clone());
    let participant = env.storage().persistent().get(&key);
    if participant.is_some() {
        extend_persistent(env, &key);
    }
    participant
}

pub fn set_participant(env: &Env, identity: &Address, participant: &Participant) {
    let key = DataKey::Participant(identity.clone());
    env.storage().persistent().set(&key, participant);
    extend_persistent(env, &key);
}

pub fn has_participant(env: &Env, identity: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Participant(identity.clone()))
}
