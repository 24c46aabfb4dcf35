multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_FUNDS, ERR_ZERO_AMOUNT};

/// Pooled EGLD balance. The tracked balance only moves through the
/// endpoints below and `release_funds`, so it never goes negative and
/// always matches what the contract holds.
#[multiversx_sc::module]
pub trait TreasuryModule: crate::roles::RolesModule + crate::events::EventsModule {
    #[endpoint(depositFunds)]
    #[payable("EGLD")]
    fn deposit_funds(&self) -> BigUint {
        let caller = self.require_admin();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.treasury_balance().update(|balance| *balance += &amount);

        self.funds_deposited_event(&caller, &amount);
        self.treasury_balance().get()
    }

    /// Sends `amount` back to the admin.
    #[endpoint(withdrawFunds)]
    fn withdraw_funds(&self, amount: BigUint) -> BigUint {
        let caller = self.require_admin();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);
        self.debit(&amount);

        self.send().direct_egld(&caller, &amount);
        self.funds_withdrawn_event(&caller, &amount);
        self.treasury_balance().get()
    }

    /// Pays a stage amount out to a proposal recipient. Only the stage
    /// engine calls this.
    fn release_funds(&self, recipient: &ManagedAddress, amount: &BigUint) {
        self.debit(amount);
        self.total_disbursed().update(|total| *total += amount);
        self.send().direct_egld(recipient, amount);
    }

    fn debit(&self, amount: &BigUint) {
        let balance = self.treasury_balance().get();
        require!(amount <= &balance, ERR_INSUFFICIENT_FUNDS);
        self.treasury_balance().set(balance - amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractBalance)]
    fn get_contract_balance(&self) -> BigUint {
        self.treasury_balance().get()
    }

    #[view(getTotalDisbursed)]
    fn get_total_disbursed(&self) -> BigUint {
        self.total_disbursed().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("treasuryBalance")]
    fn treasury_balance(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalDisbursed")]
    fn total_disbursed(&self) -> SingleValueMapper<BigUint>;
}
